// SPDX-License-Identifier: GPL-3.0-only

//! A row of page-navigation controls.
//!
//! The selector is a pure function of its inputs: the page the caller is
//! showing, how many pages exist, and a message constructor invoked when the
//! user picks another page. It keeps no state of its own; the caller owns the
//! current page and re-renders with new inputs after handling the message.

use iced::widget::{Row, button, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use listado_utils::styling::{GLOBAL_SPACING, PAGE_CONTROL_SIZE, TEXT_SIZE};

use crate::listado::theme;

/// A single control of the selector row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Steps one page back. `target` is `None` when the control is disabled.
    Previous { target: Option<usize> },
    /// Jumps directly to `page`.
    Number { page: usize, is_current: bool },
    /// Steps one page forward. `target` is `None` when the control is disabled.
    Next { target: Option<usize> },
}

/// Derives the control row for the given pagination inputs.
///
/// Empty when there is at most one page: nothing to navigate. A previous or
/// next target is only produced when it lands inside `1..=total_pages`, so an
/// out-of-range `current_page` renders a row with the step controls disabled
/// and no page marked current.
pub fn controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut row = Vec::with_capacity(total_pages + 2);

    row.push(PageControl::Previous {
        target: current_page
            .checked_sub(1)
            .filter(|page| (1..=total_pages).contains(page)),
    });

    row.extend((1..=total_pages).map(|page| PageControl::Number {
        page,
        is_current: page == current_page,
    }));

    row.push(PageControl::Next {
        target: (current_page < total_pages).then_some(current_page + 1),
    });

    row
}

/// Renders the page selector.
///
/// `on_page_change` receives the requested page number, always within
/// `1..=total_pages`. Disabled controls never publish a message.
pub fn page_selector<'a, Message>(
    current_page: usize,
    total_pages: usize,
    on_page_change: impl Fn(usize) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut selector = Row::new()
        .spacing(GLOBAL_SPACING)
        .align_y(Alignment::Center);

    for control in controls(current_page, total_pages) {
        selector = selector.push(match control {
            PageControl::Previous { target } => {
                control_button("‹", target.map(&on_page_change), false)
            }
            PageControl::Number { page, is_current } => {
                control_button(page.to_string(), Some(on_page_change(page)), is_current)
            }
            PageControl::Next { target } => {
                control_button("›", target.map(&on_page_change), false)
            }
        });
    }

    selector.into()
}

fn control_button<'a, Message>(
    label: impl text::IntoFragment<'a>,
    on_press: Option<Message>,
    is_current: bool,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    button(
        text(label)
            .size(TEXT_SIZE)
            .shaping(text::Shaping::Advanced)
            .center(),
    )
    .width(Length::Fixed(PAGE_CONTROL_SIZE))
    .height(Length::Fixed(PAGE_CONTROL_SIZE))
    .padding(0)
    .on_press_maybe(on_press)
    .style(move |_theme: &Theme, status| {
        if is_current {
            current_page_style(status)
        } else {
            plain_page_style(status)
        }
    })
    .into()
}

fn plain_page_style(status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(theme::SURFACE)),
        text_color: theme::FOREGROUND_MUTED,
        border: control_border(theme::BORDER),
        ..button::Style::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(theme::SURFACE_HOVERED)),
            ..base
        },
        button::Status::Disabled => disabled(base),
    }
}

fn current_page_style(status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(theme::PRIMARY)),
        text_color: Color::WHITE,
        border: control_border(theme::PRIMARY),
        ..button::Style::default()
    };

    match status {
        button::Status::Disabled => disabled(base),
        _ => base,
    }
}

fn control_border(color: Color) -> Border {
    Border {
        color,
        width: 1.0,
        radius: 8.0.into(),
    }
}

fn disabled(base: button::Style) -> button::Style {
    button::Style {
        background: base
            .background
            .map(|background| background.scale_alpha(0.5)),
        text_color: base.text_color.scale_alpha(0.5),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_when_there_is_at_most_one_page() {
        assert!(controls(1, 0).is_empty());
        assert!(controls(1, 1).is_empty());
        assert!(controls(5, 1).is_empty());
    }

    #[test]
    fn renders_every_page_in_ascending_order() {
        let row = controls(3, 5);

        assert_eq!(row.len(), 7);
        assert!(matches!(row[0], PageControl::Previous { .. }));
        assert!(matches!(row[6], PageControl::Next { .. }));

        for (offset, control) in row[1..6].iter().enumerate() {
            assert_eq!(
                *control,
                PageControl::Number {
                    page: offset + 1,
                    is_current: offset + 1 == 3,
                }
            );
        }
    }

    #[test]
    fn exactly_one_page_is_marked_current() {
        let current: Vec<usize> = controls(3, 5)
            .into_iter()
            .filter_map(|control| match control {
                PageControl::Number { page, is_current } => is_current.then_some(page),
                _ => None,
            })
            .collect();

        assert_eq!(current, vec![3]);
    }

    #[test]
    fn no_page_is_marked_current_out_of_range() {
        for current_page in [0, 6, 9] {
            assert!(controls(current_page, 5).iter().all(|control| {
                !matches!(control, PageControl::Number { is_current: true, .. })
            }));
        }
    }

    #[test]
    fn previous_is_disabled_on_the_first_page() {
        assert_eq!(controls(1, 4)[0], PageControl::Previous { target: None });
    }

    #[test]
    fn previous_steps_one_page_back() {
        assert_eq!(controls(3, 5)[0], PageControl::Previous { target: Some(2) });
        assert_eq!(controls(5, 5)[0], PageControl::Previous { target: Some(4) });
    }

    #[test]
    fn next_is_disabled_on_the_last_page() {
        let row = controls(5, 5);
        assert_eq!(row[row.len() - 1], PageControl::Next { target: None });
    }

    #[test]
    fn next_steps_one_page_forward() {
        let row = controls(3, 5);
        assert_eq!(row[row.len() - 1], PageControl::Next { target: Some(4) });
    }

    #[test]
    fn step_targets_never_leave_the_page_range() {
        // current_page above total_pages must not produce a target outside
        // 1..=total_pages, so both step controls end up disabled.
        let row = controls(7, 5);

        assert_eq!(row[0], PageControl::Previous { target: None });
        assert_eq!(row[row.len() - 1], PageControl::Next { target: None });
    }

    #[test]
    fn third_of_five_pages_scenario() {
        assert_eq!(
            controls(3, 5),
            vec![
                PageControl::Previous { target: Some(2) },
                PageControl::Number { page: 1, is_current: false },
                PageControl::Number { page: 2, is_current: false },
                PageControl::Number { page: 3, is_current: true },
                PageControl::Number { page: 4, is_current: false },
                PageControl::Number { page: 5, is_current: false },
                PageControl::Next { target: Some(4) },
            ]
        );
    }
}
