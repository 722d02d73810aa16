/*
[INPUT]:  TaskFormController, crossterm key codes, caller-owned loading flag
[OUTPUT]: TaskFormView input surface, FormAction results, ratatui rendering
[POS]:    TUI component for the task creation form
[UPDATE]: When form fields, focus order, or display variants change
*/

use crossterm::event::KeyCode;
use hecate_client::{TaskCategory, TaskPriority, TaskType};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use serde::{Deserialize, Serialize};
use tui_input::{Input, InputRequest};

use crate::form::{DESCRIPTION_MAX_LEN, DraftUpdate, NAME_MAX_LEN, TaskFormController};
use crate::ui::{border_style, centered_rect, disabled_style, focused_style, label_style};

const TITLE: &str = "Create Task";

/// Wrapping chrome around the form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Centered popup over the dashboard
    #[default]
    Default,
    /// Inline block inside the given area
    Embedded,
    /// Takes the whole frame
    Fullscreen,
}

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Priority,
    AutoStart,
    RequiresApproval,
    Create,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 7] = [
        FormField::Name,
        FormField::Description,
        FormField::Priority,
        FormField::AutoStart,
        FormField::RequiresApproval,
        FormField::Create,
        FormField::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Description)
    }
}

/// What the owner of the form should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// Start a submission through `begin_submit`.
    Submit,
    /// The controller's close callback has already run.
    Cancelled,
}

/// Keyboard surface for one `TaskFormController`.
///
/// Text edits go through `tui_input` and are pushed to the controller as
/// whole-field `DraftUpdate`s. Length caps are enforced here, not in the
/// controller.
#[derive(Debug)]
pub struct TaskFormView {
    controller: TaskFormController,
    name: Input,
    description: Input,
    focus: FormField,
    variant: FormVariant,
}

impl TaskFormView {
    pub fn new(controller: TaskFormController, variant: FormVariant) -> Self {
        let name = Input::new(controller.draft().name.clone());
        let description = Input::new(controller.draft().description.clone());
        Self {
            controller,
            name,
            description,
            focus: FormField::Name,
            variant,
        }
    }

    pub fn controller(&self) -> &TaskFormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TaskFormController {
        &mut self.controller
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Re-read text inputs from the draft, e.g. after a successful submit
    /// reset it.
    pub fn sync_from_draft(&mut self) {
        self.name = Input::new(self.controller.draft().name.clone());
        self.description = Input::new(self.controller.draft().description.clone());
    }

    /// Create is enabled only for a submittable draft with no submission in flight.
    pub fn create_enabled(&self, is_loading: bool) -> bool {
        !is_loading && self.controller.can_submit()
    }

    pub fn handle_key(&mut self, key: KeyCode, is_loading: bool) -> FormAction {
        match key {
            KeyCode::Esc => self.cancel(is_loading),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                FormAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                FormAction::None
            }
            KeyCode::Enter => self.activate(is_loading),
            other => {
                self.edit(other);
                FormAction::None
            }
        }
    }

    fn cancel(&mut self, is_loading: bool) -> FormAction {
        // the outstanding submission still needs this controller to settle
        if is_loading {
            return FormAction::None;
        }
        self.controller.cancel();
        FormAction::Cancelled
    }

    fn activate(&mut self, is_loading: bool) -> FormAction {
        match self.focus {
            // Enter in a text field acts as Create and shares its gate
            FormField::Name | FormField::Description | FormField::Create => {
                if self.create_enabled(is_loading) {
                    FormAction::Submit
                } else {
                    FormAction::None
                }
            }
            FormField::Priority => {
                self.cycle_priority(true);
                FormAction::None
            }
            FormField::AutoStart | FormField::RequiresApproval => {
                self.toggle();
                FormAction::None
            }
            FormField::Cancel => self.cancel(is_loading),
        }
    }

    fn edit(&mut self, key: KeyCode) {
        match self.focus {
            field if field.is_text() => self.edit_text(key),
            FormField::Priority => match key {
                KeyCode::Left => self.cycle_priority(false),
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_priority(true),
                _ => {}
            },
            FormField::AutoStart | FormField::RequiresApproval => {
                if key == KeyCode::Char(' ') {
                    self.toggle();
                }
            }
            _ => {}
        }
    }

    fn edit_text(&mut self, key: KeyCode) {
        let (input, max_len) = match self.focus {
            FormField::Name => (&mut self.name, NAME_MAX_LEN),
            _ => (&mut self.description, DESCRIPTION_MAX_LEN),
        };

        let request = match key {
            KeyCode::Char(ch) => {
                if input.value().chars().count() >= max_len {
                    return;
                }
                InputRequest::InsertChar(ch)
            }
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };

        let changed = input.handle(request).is_some_and(|state| state.value);
        if !changed {
            return;
        }
        let value = input.value().to_string();
        let update = match self.focus {
            FormField::Name => DraftUpdate::Name(value),
            _ => DraftUpdate::Description(value),
        };
        self.controller.update_field(update);
    }

    fn cycle_priority(&mut self, forward: bool) {
        let current = self.controller.draft().priority;
        let priority = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.controller.update_field(DraftUpdate::Priority(priority));
    }

    fn toggle(&mut self) {
        let draft = self.controller.draft();
        let update = match self.focus {
            FormField::AutoStart => DraftUpdate::AutoStart(!draft.auto_start),
            FormField::RequiresApproval => DraftUpdate::RequiresApproval(!draft.requires_approval),
            _ => return,
        };
        self.controller.update_field(update);
    }
}

fn task_type_label(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::System => "System",
        TaskType::User => "User",
        TaskType::Agent => "Agent",
        TaskType::Workflow => "Workflow",
    }
}

fn category_label(category: TaskCategory) -> &'static str {
    match category {
        TaskCategory::UserAssigned => "User assigned",
        TaskCategory::AutoGenerated => "Auto generated",
        TaskCategory::Recurring => "Recurring",
    }
}

fn field_label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        focused_style()
    } else {
        label_style()
    };
    Span::styled(format!("{text:<18}"), style)
}

fn text_field_line(label: &str, input: &Input, max_len: usize, focused: bool) -> Line<'static> {
    let count = input.value().chars().count();
    let mut spans = vec![field_label(label, focused), Span::raw(input.value().to_string())];
    if focused {
        spans.push(Span::styled(" █", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        format!("  ({count}/{max_len})"),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![field_label(label, focused), Span::raw(mark)])
}

fn priority_line(priority: TaskPriority, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(vec![
        field_label("Priority:", focused),
        Span::styled(format!("< {} >", priority.label()), value_style),
    ])
}

fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let text = format!("[ {label} ]");
    if !enabled {
        return Span::styled(text, disabled_style());
    }
    if focused {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(Color::Cyan))
    }
}

fn body_lines(view: &TaskFormView, is_loading: bool) -> Vec<Line<'static>> {
    let draft = view.controller.draft();
    let focus = view.focus;

    let mut content = vec![
        Line::from(""),
        text_field_line("Name:", &view.name, NAME_MAX_LEN, focus == FormField::Name),
        text_field_line(
            "Description:",
            &view.description,
            DESCRIPTION_MAX_LEN,
            focus == FormField::Description,
        ),
        Line::from(""),
        Line::from(vec![
            field_label("Type:", false),
            Span::raw(task_type_label(draft.task_type)),
        ]),
        Line::from(vec![
            field_label("Category:", false),
            Span::raw(category_label(draft.category)),
        ]),
        priority_line(draft.priority, focus == FormField::Priority),
        checkbox_line("Auto start:", draft.auto_start, focus == FormField::AutoStart),
        checkbox_line(
            "Needs approval:",
            draft.requires_approval,
            focus == FormField::RequiresApproval,
        ),
        Line::from(""),
    ];

    if let Some(error) = view.controller.error() {
        content.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]));
        content.push(Line::from(""));
    }

    let create_label = if is_loading { "Creating…" } else { "Create" };
    content.push(Line::from(vec![
        button(
            create_label,
            focus == FormField::Create,
            view.create_enabled(is_loading),
        ),
        Span::raw("  "),
        button("Cancel", focus == FormField::Cancel, !is_loading),
    ]));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Tab/↑↓ ", Style::default().fg(Color::Cyan)),
        Span::raw("Move  "),
        Span::styled("←/→/Space ", Style::default().fg(Color::Cyan)),
        Span::raw("Change  "),
        Span::styled("Enter ", Style::default().fg(Color::Cyan)),
        Span::raw("Submit  "),
        Span::styled("Esc ", Style::default().fg(Color::Cyan)),
        Span::raw("Cancel"),
    ]));
    content
}

/// Render the form using the view's variant. `area` is the region the
/// caller reserved for the form; fullscreen ignores it and uses the frame.
pub fn render(frame: &mut Frame, area: Rect, view: &TaskFormView, is_loading: bool) {
    let (target, block) = match view.variant {
        FormVariant::Default => {
            let popup = centered_rect(70, 70, area);
            frame.render_widget(Clear, popup);
            let block = Block::default()
                .title(format!(" {TITLE} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            (popup, block)
        }
        FormVariant::Embedded => {
            let block = Block::default()
                .title(TITLE)
                .borders(Borders::ALL)
                .border_style(border_style());
            (area, block)
        }
        FormVariant::Fullscreen => {
            let full = frame.area();
            frame.render_widget(Clear, full);
            let block = Block::default()
                .title(format!(" {TITLE} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(border_style());
            (full, block)
        }
    };

    let widget = Paragraph::new(body_lines(view, is_loading))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, target);
}
