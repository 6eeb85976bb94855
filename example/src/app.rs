use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};
use tessera_datepicker::date_picker::{
    DatePickerArgs, DatePickerFieldArgs, DatePickerState, date_picker_field,
};
use tessera_ui::{Dp, Modifier, remember, tessera, use_context};

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        root_surface();
    });
}

#[tessera]
fn root_surface() {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .style(SurfaceStyle::Filled {
                color: scheme.surface,
            }),
        booking_page,
    ));
}

/// Minimal host page: a date field in controlled mode plus a summary line
/// that reads the selection back from the shared state.
#[tessera]
fn booking_page() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let typography = theme.typography;
    let title_color = theme.color_scheme.on_surface;
    let summary_color = theme.color_scheme.on_surface_variant;

    let state = remember(DatePickerState::default);
    let summary = match state.with(|s| s.selected()) {
        Some(date) => format!("Selected date: {}", date.format("%m/%d/%Y")),
        None => "No date selected yet".to_string(),
    };

    column(
        ColumnArgs::default().modifier(Modifier::new().padding_all(Dp(24.0))),
        move |scope| {
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text("Pick a date")
                        .size(typography.title_large.font_size)
                        .color(title_color),
                );
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0))));
            });
            scope.child(move || {
                date_picker_field(
                    &DatePickerFieldArgs::default().picker(
                        DatePickerArgs::default().state(state).on_date_selected(
                            |date| {
                                tracing::info!(date = %date, "date chosen");
                            },
                        ),
                    ),
                );
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0))));
            });
            let summary = summary.clone();
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(summary.clone())
                        .size(typography.body_large.font_size)
                        .color(summary_color),
                );
            });
        },
    );
}
