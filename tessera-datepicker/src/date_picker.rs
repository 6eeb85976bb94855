//! Date picker components for selecting a calendar date.
//!
//! ## Usage
//!
//! Use to let users choose a date for forms, bookings, or filters.
use chrono::NaiveDate;
use derive_setters::Setters;
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    boxed::{BoxedArgs, boxed},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};
use tessera_ui::{
    CallbackWith, Color, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
};

use crate::calendar::{DayCell, GRID_COLUMNS, MonthCursor, month_grid};

const DAY_CELL_SIZE: Dp = Dp(40.0);
const NAV_BUTTON_SIZE: Dp = Dp(32.0);
const FIELD_WIDTH: Dp = Dp(180.0);
const FIELD_HEIGHT: Dp = Dp(48.0);
const FIELD_RADIUS: Dp = Dp(8.0);
const FIELD_PADDING: Dp = Dp(12.0);
const POPUP_RADIUS: Dp = Dp(12.0);
const POPUP_GAP: Dp = Dp(8.0);
const HEADER_GAP: Dp = Dp(8.0);

/// Column headers of the day grid, Sunday first.
const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Holds the displayed month, the selected date, and the expansion flag for
/// a date picker.
pub struct DatePickerState {
    cursor: MonthCursor,
    selected: Option<NaiveDate>,
    expanded: bool,
}

impl DatePickerState {
    /// Creates a date picker state with the provided initial values.
    ///
    /// The displayed month anchors to `initial_month` when given, otherwise
    /// to the month of `initial_selection`, otherwise to the current local
    /// month.
    pub fn new(initial_selection: Option<NaiveDate>, initial_month: Option<MonthCursor>) -> Self {
        let cursor = initial_month
            .or_else(|| initial_selection.map(MonthCursor::at))
            .unwrap_or_default();
        Self {
            cursor,
            selected: initial_selection,
            expanded: false,
        }
    }

    /// Returns the currently selected date, if any.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Returns the displayed month cursor.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// Returns whether the calendar surface is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands or collapses the calendar surface.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Toggles the calendar surface between expanded and collapsed.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Replaces the selected date directly without touching the displayed
    /// month or the expansion flag.
    pub fn set_selected(&mut self, selected: Option<NaiveDate>) {
        self.selected = selected;
    }

    /// Shows the month before the displayed one. The selection is untouched.
    pub fn retreat_month(&mut self) {
        self.cursor.retreat();
    }

    /// Shows the month after the displayed one. The selection is untouched.
    pub fn advance_month(&mut self) {
        self.cursor.advance();
    }

    /// Applies a day-cell click and reports whether it was accepted.
    ///
    /// Clicks on adjacent-month cells are ignored entirely: the selection
    /// does not change and the calendar surface stays expanded. An in-month
    /// click stores the date and collapses the surface.
    pub fn select(&mut self, cell: &DayCell) -> bool {
        if cell.other_month {
            return false;
        }
        self.selected = Some(cell.date);
        self.expanded = false;
        true
    }

    fn snapshot(&self) -> DatePickerSnapshot {
        DatePickerSnapshot {
            cursor: self.cursor,
            selected: self.selected,
            expanded: self.expanded,
        }
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        DatePickerState::new(None, None)
    }
}

#[derive(Clone, Copy, PartialEq)]
struct DatePickerSnapshot {
    cursor: MonthCursor,
    selected: Option<NaiveDate>,
    expanded: bool,
}

/// Configuration options for [`date_picker`].
///
/// Initial-state fields are applied only when `date_picker` owns the state.
#[derive(PartialEq, Clone, Setters)]
pub struct DatePickerArgs {
    /// Optional modifier chain applied to the date picker.
    pub modifier: Modifier,
    /// Initial selected date for the internal state.
    #[setters(strip_option)]
    pub initial_selection: Option<NaiveDate>,
    /// Initial displayed month for the internal state.
    #[setters(strip_option)]
    pub initial_month: Option<MonthCursor>,
    /// Callback invoked with the chosen date when the user picks an in-month
    /// day. Adjacent-month cells never trigger it.
    #[setters(skip)]
    pub on_date_selected: CallbackWith<NaiveDate, ()>,
    /// Optional external state for the displayed month and selection.
    ///
    /// When this is `None`, `date_picker` creates and owns an internal state.
    #[setters(skip)]
    pub state: Option<State<DatePickerState>>,
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            initial_selection: None,
            initial_month: None,
            on_date_selected: CallbackWith::new(|_| {}),
            state: None,
        }
    }
}

impl DatePickerArgs {
    /// Sets the date-selected handler.
    pub fn on_date_selected<F>(mut self, on_date_selected: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.on_date_selected = CallbackWith::new(on_date_selected);
        self
    }

    /// Sets the date-selected handler using a shared callback.
    pub fn on_date_selected_shared(
        mut self,
        on_date_selected: impl Into<CallbackWith<NaiveDate, ()>>,
    ) -> Self {
        self.on_date_selected = on_date_selected.into();
        self
    }

    /// Sets an external date picker state.
    pub fn state(mut self, state: State<DatePickerState>) -> Self {
        self.state = Some(state);
        self
    }
}

/// Configuration for [`date_picker_field`].
#[derive(PartialEq, Clone, Setters)]
pub struct DatePickerFieldArgs {
    /// Optional modifier chain applied to the field and its popup.
    pub modifier: Modifier,
    /// Placeholder shown while no date is selected.
    #[setters(into)]
    pub placeholder: String,
    /// Picker configuration forwarded to [`date_picker`].
    pub picker: DatePickerArgs,
}

impl Default for DatePickerFieldArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            placeholder: "Select date".to_string(),
            picker: DatePickerArgs::default(),
        }
    }
}

/// # date_picker
///
/// Render a calendar surface for picking a single date.
///
/// The surface shows a month-navigation header, a weekday header row, and a
/// fixed six-week day grid. Days of adjacent months are rendered
/// de-emphasized and are not interactive. The grid is recomputed from the
/// displayed month on every build.
///
/// ## Usage
///
/// Use directly when the calendar should always be visible; use
/// [`date_picker_field`] for the input-with-popup arrangement.
///
/// ## Parameters
///
/// - `args` — configuration for the calendar layout, callbacks, and state
///   ownership; see [`DatePickerArgs`].
///
/// ## Examples
///
/// ```
/// use tessera_datepicker::date_picker::{DatePickerArgs, date_picker};
/// use tessera_ui::{remember, tessera};
///
/// #[tessera]
/// fn picker_demo() {
///     let picked = remember(|| None);
///     date_picker(
///         &DatePickerArgs::default().on_date_selected(move |date| {
///             picked.set(Some(date));
///         }),
///     );
/// }
/// ```
#[tessera]
pub fn date_picker(args: &DatePickerArgs) {
    let mut args: DatePickerArgs = args.clone();
    let initial_selection = args.initial_selection;
    let initial_month = args.initial_month;

    let state = args
        .state
        .unwrap_or_else(|| remember(move || DatePickerState::new(initial_selection, initial_month)));
    args.state = Some(state);
    date_picker_node(&args);
}

#[tessera]
fn date_picker_node(args: &DatePickerArgs) {
    let state = args
        .state
        .expect("date_picker_node requires state to be set");
    let args = args.clone();
    let snapshot = state.with(|s| s.snapshot());

    let modifier = args.modifier;
    let on_date_selected = args.on_date_selected;
    let title = month_title(snapshot.cursor);
    let selected = snapshot.selected;

    let weeks: Vec<[DayCell; GRID_COLUMNS]> =
        month_grid(snapshot.cursor.year(), snapshot.cursor.month0())
            .chunks_exact(GRID_COLUMNS)
            .map(|week| {
                <[DayCell; GRID_COLUMNS]>::try_from(week).expect("grid rows are seven cells wide")
            })
            .collect();

    column(
        ColumnArgs::default()
            .modifier(modifier)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let title = title.clone();
            scope.child(move || {
                month_header(title.clone(), state);
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(HEADER_GAP)));
            });
            scope.child(weekday_header);
            for week in weeks.clone() {
                let on_date_selected = on_date_selected.clone();
                scope.child(move || {
                    week_row(week, selected, state, on_date_selected.clone());
                });
            }
        },
    );
}

/// # date_picker_field
///
/// Render a read-only date field that expands a [`date_picker`] popup when
/// clicked.
///
/// The field shows the selected date in `MM/DD/YYYY` form (or a placeholder
/// while nothing is selected). Picking an in-month day collapses the popup;
/// clicking an adjacent-month day leaves it open.
///
/// ## Parameters
///
/// - `args` — field layout and forwarded picker configuration; see
///   [`DatePickerFieldArgs`].
///
/// ## Examples
///
/// ```
/// use tessera_datepicker::date_picker::{
///     DatePickerArgs, DatePickerFieldArgs, DatePickerState, date_picker_field,
/// };
/// use tessera_ui::{remember, tessera};
///
/// #[tessera]
/// fn field_demo() {
///     let state = remember(DatePickerState::default);
///     date_picker_field(
///         &DatePickerFieldArgs::default().picker(DatePickerArgs::default().state(state)),
///     );
/// }
/// ```
#[tessera]
pub fn date_picker_field(args: &DatePickerFieldArgs) {
    let mut args: DatePickerFieldArgs = args.clone();
    let initial_selection = args.picker.initial_selection;
    let initial_month = args.picker.initial_month;

    let state = args
        .picker
        .state
        .unwrap_or_else(|| remember(move || DatePickerState::new(initial_selection, initial_month)));
    args.picker.state = Some(state);

    let snapshot = state.with(|s| s.snapshot());
    let field_label = snapshot.selected.map(format_field_date);
    let expanded = snapshot.expanded;

    let modifier = args.modifier;
    let placeholder = args.placeholder;
    let picker = args.picker;

    column(ColumnArgs::default().modifier(modifier), move |scope| {
        let field_label = field_label.clone();
        let placeholder = placeholder.clone();
        scope.child(move || {
            field_surface(field_label.clone(), placeholder.clone(), state);
        });

        if expanded {
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(POPUP_GAP)));
            });
            let picker = picker.clone();
            scope.child(move || {
                popup_surface(picker.clone());
            });
        }
    });
}

fn month_header(title: String, state: State<DatePickerState>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;
    let title_color = scheme.on_surface;

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |row_scope| {
            row_scope.child(move || {
                nav_button("<", move || {
                    state.with_mut(|s| s.retreat_month());
                    tracing::debug!("showing previous month");
                });
            });
            let title = title.clone();
            row_scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(title.clone())
                        .size(typography.title_medium.font_size)
                        .color(title_color),
                );
            });
            row_scope.child(move || {
                nav_button(">", move || {
                    state.with_mut(|s| s.advance_month());
                    tracing::debug!("showing next month");
                });
            });
        },
    );
}

fn nav_button(label: &'static str, on_click: impl Fn() + Send + Sync + 'static) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(on_click),
        move || {
            text(
                &TextArgs::default()
                    .text(label)
                    .size(typography.body_medium.font_size)
                    .color(scheme.on_surface),
            );
        },
    ));
}

fn weekday_header() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;
    let label_color = scheme.on_surface_variant;

    row(RowArgs::default(), move |row_scope| {
        for label in WEEKDAY_LABELS {
            row_scope.child(move || {
                boxed(
                    BoxedArgs::default()
                        .alignment(Alignment::Center)
                        .modifier(Modifier::new().width(DAY_CELL_SIZE)),
                    move |scope| {
                        scope.child(move || {
                            text(
                                &TextArgs::default()
                                    .text(label)
                                    .size(typography.label_large.font_size)
                                    .color(label_color),
                            );
                        });
                    },
                );
            });
        }
    });
}

fn week_row(
    week: [DayCell; GRID_COLUMNS],
    selected: Option<NaiveDate>,
    state: State<DatePickerState>,
    on_date_selected: CallbackWith<NaiveDate, ()>,
) {
    row(RowArgs::default(), move |row_scope| {
        for cell in week {
            let on_date_selected = on_date_selected.clone();
            row_scope.child(move || {
                let is_selected = !cell.other_month && selected == Some(cell.date);
                day_cell(cell, is_selected, state, on_date_selected.clone());
            });
        }
    });
}

fn day_cell(
    cell: DayCell,
    is_selected: bool,
    state: State<DatePickerState>,
    on_date_selected: CallbackWith<NaiveDate, ()>,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let (style, label_color) = if is_selected {
        (
            SurfaceStyle::Filled {
                color: scheme.primary,
            },
            scheme.on_primary,
        )
    } else if cell.other_month {
        (
            SurfaceStyle::Filled {
                color: Color::TRANSPARENT,
            },
            scheme.outline,
        )
    } else {
        (
            SurfaceStyle::Filled {
                color: Color::TRANSPARENT,
            },
            scheme.on_surface,
        )
    };

    let mut surface_args = SurfaceArgs::default()
        .modifier(Modifier::new().size(DAY_CELL_SIZE, DAY_CELL_SIZE))
        .style(style)
        .shape(Shape::Ellipse)
        .content_alignment(Alignment::Center);

    // Adjacent-month cells are inert: no selection, no popup collapse.
    if !cell.other_month {
        let on_date_selected = on_date_selected.clone();
        surface_args = surface_args.on_click(move || {
            let accepted = state.with_mut(|s| s.select(&cell));
            if accepted {
                tracing::debug!(date = %cell.date, "date selected");
                on_date_selected.call(cell.date);
            }
        });
    }

    let label = cell.date.format("%-d").to_string();
    surface(&SurfaceArgs::with_child(surface_args, move || {
        text(
            &TextArgs::default()
                .text(label.clone())
                .size(typography.body_medium.font_size)
                .color(label_color),
        );
    }));
}

fn field_surface(value: Option<String>, placeholder: String, state: State<DatePickerState>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let (label, label_color) = match value {
        Some(value) => (value, scheme.on_surface),
        None => (placeholder, scheme.on_surface_variant),
    };

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().width(FIELD_WIDTH).height(FIELD_HEIGHT))
            .style(SurfaceStyle::Outlined {
                color: scheme.outline,
                width: Dp(1.0),
            })
            .shape(Shape::rounded_rectangle(FIELD_RADIUS))
            .content_alignment(Alignment::CenterStart)
            .accessibility_label("Selected date")
            .on_click(move || {
                state.with_mut(|s| s.toggle_expanded());
            }),
        move || {
            let label = label.clone();
            boxed(
                BoxedArgs::default()
                    .modifier(Modifier::new().padding_symmetric(FIELD_PADDING, Dp(0.0))),
                move |scope| {
                    let label = label.clone();
                    scope.child(move || {
                        text(
                            &TextArgs::default()
                                .text(label.clone())
                                .size(typography.body_large.font_size)
                                .color(label_color),
                        );
                    });
                },
            );
        },
    ));
}

fn popup_surface(picker: DatePickerArgs) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().padding_all(FIELD_PADDING))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container,
            })
            .shape(Shape::rounded_rectangle(POPUP_RADIUS))
            .elevation(Dp(3.0)),
        move || {
            date_picker(&picker.clone());
        },
    ));
}

fn month_title(cursor: MonthCursor) -> String {
    cursor.first_day().format("%B %Y").to_string()
}

fn format_field_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::month_grid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    fn cell_for(grid: &[DayCell], target: NaiveDate) -> DayCell {
        *grid
            .iter()
            .find(|cell| cell.date == target)
            .expect("date is present in the grid")
    }

    #[test]
    fn selecting_an_adjacent_month_cell_is_ignored() {
        let mut state = DatePickerState::new(None, Some(MonthCursor::new(2024, 1)));
        state.set_expanded(true);
        let grid = month_grid(2024, 1);
        let adjacent = cell_for(&grid, date(2024, 1, 28));
        assert!(adjacent.other_month);

        assert!(!state.select(&adjacent));
        assert_eq!(state.selected(), None);
        assert!(state.is_expanded(), "an ignored click must not collapse");
    }

    #[test]
    fn selecting_an_in_month_cell_stores_and_collapses() {
        let mut state = DatePickerState::new(None, Some(MonthCursor::new(2024, 1)));
        state.set_expanded(true);
        let grid = month_grid(2024, 1);
        let in_month = cell_for(&grid, date(2024, 2, 29));
        assert!(!in_month.other_month);

        assert!(state.select(&in_month));
        assert_eq!(state.selected(), Some(date(2024, 2, 29)));
        assert!(!state.is_expanded());
    }

    #[test]
    fn state_anchors_to_the_selection_month() {
        let state = DatePickerState::new(Some(date(1999, 12, 31)), None);
        assert_eq!(state.cursor(), MonthCursor::new(1999, 11));
        assert_eq!(state.selected(), Some(date(1999, 12, 31)));
    }

    #[test]
    fn explicit_anchor_overrides_the_selection_month() {
        let state = DatePickerState::new(Some(date(1999, 12, 31)), Some(MonthCursor::new(2024, 5)));
        assert_eq!(state.cursor(), MonthCursor::new(2024, 5));
    }

    #[test]
    fn month_navigation_keeps_the_selection() {
        let mut state = DatePickerState::new(Some(date(2024, 2, 14)), None);
        state.retreat_month();
        state.retreat_month();
        state.advance_month();
        assert_eq!(state.cursor(), MonthCursor::new(2024, 0));
        assert_eq!(state.selected(), Some(date(2024, 2, 14)));
    }

    #[test]
    fn field_date_uses_a_fixed_display_format() {
        assert_eq!(format_field_date(date(2024, 2, 1)), "02/01/2024");
        assert_eq!(format_field_date(date(1999, 12, 31)), "12/31/1999");
    }

    #[test]
    fn month_title_names_month_and_year() {
        assert_eq!(month_title(MonthCursor::new(2024, 1)), "February 2024");
        assert_eq!(month_title(MonthCursor::new(1999, 0)), "January 1999");
    }

    #[test]
    fn weekday_labels_start_on_sunday() {
        assert_eq!(WEEKDAY_LABELS[0], "Su");
        assert_eq!(WEEKDAY_LABELS[6], "Sa");
    }
}
