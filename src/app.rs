// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{Column, Row, Rule, Space, button, center, container, row, text};
use iced::{Alignment, Length, Pixels, Task, Theme};

use listado_core::models::listing::{Listing, ListingCategory};
use listado_utils::pagination::PaginationConfig;
use listado_utils::styling::{GLOBAL_BUTTON_HEIGHT, GLOBAL_SPACING, TEXT_SIZE, TITLE_TEXT_SIZE};

use crate::listado::theme;
use crate::listado::widgets::page_selector;

const LIST_WIDTH: f32 = 780.;

pub struct Listado {
    state: State,
}

enum State {
    Loading,
    Ready {
        listings: Vec<Listing>,
        /// `None` shows every category
        category_filter: Option<ListingCategory>,
        /// Holds the pagination state of the listings list
        pagination: PaginationConfig,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Vec<Listing>),
    CategorySelected(Option<ListingCategory>),
    PageSelected(usize),
}

impl Listado {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: State::Loading,
            },
            Task::perform(
                async { Listing::sample_catalog() },
                Message::CatalogLoaded,
            ),
        )
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(listings) => {
                self.state = State::Ready {
                    listings,
                    category_filter: None,
                    pagination: PaginationConfig::default(),
                };
            }

            Message::CategorySelected(category) => {
                let State::Ready {
                    category_filter,
                    pagination,
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                // A new filter produces a new page set, start from the first one.
                *category_filter = category;
                *pagination = PaginationConfig::default();
            }

            Message::PageSelected(page) => {
                let State::Ready {
                    listings,
                    category_filter,
                    pagination,
                } = &mut self.state
                else {
                    return Task::none();
                };

                let visible = filtered_count(listings, *category_filter);
                pagination.select_page(page, visible);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        match &self.state {
            State::Loading => center(text("Loading...")).into(),
            State::Ready {
                listings,
                category_filter,
                pagination,
            } => container(catalog_view(listings, *category_filter, pagination))
                .center_x(Length::Fill)
                .padding(GLOBAL_SPACING * 4.)
                .into(),
        }
    }
}

fn filtered_count(listings: &[Listing], category_filter: Option<ListingCategory>) -> usize {
    listings
        .iter()
        .filter(|listing| category_filter.is_none_or(|category| listing.category == category))
        .count()
}

/// Returns the view of the paginated listings catalog
fn catalog_view<'a>(
    listings: &'a [Listing],
    category_filter: Option<ListingCategory>,
    pagination: &PaginationConfig,
) -> iced::Element<'a, Message> {
    let spacing = Pixels::from(GLOBAL_SPACING);

    let mut filter_row = Row::new()
        .spacing(spacing)
        .align_y(Alignment::Center)
        .push(filter_button("All", None, category_filter));

    for category in ListingCategory::ALL {
        filter_row = filter_row.push(filter_button(
            category.to_string(),
            Some(category),
            category_filter,
        ));
    }

    let title_row = row![
        text("Listado")
            .size(TITLE_TEXT_SIZE)
            .align_y(Alignment::Center),
        Space::new(Length::Fill, Length::Shrink),
        filter_row,
    ]
    .width(LIST_WIDTH)
    .align_y(Alignment::Center)
    .spacing(spacing);

    let visible: Vec<&Listing> = listings
        .iter()
        .filter(|listing| category_filter.is_none_or(|category| listing.category == category))
        .collect();

    let total_pages = pagination.total_pages(visible.len());
    let page_bounds = pagination.page_bounds(visible.len());

    let mut grid = Column::new()
        .push(title_row)
        .align_x(Alignment::Center)
        .spacing(spacing)
        .width(Length::Shrink);

    for listing in &visible[page_bounds] {
        let listing_row = Row::new()
            .width(Length::Shrink)
            .push(
                text(&listing.name)
                    .size(TEXT_SIZE)
                    .width(280.)
                    .align_y(Alignment::Center),
            )
            .push(
                text(listing.category.to_string())
                    .size(TEXT_SIZE)
                    .width(120.)
                    .align_y(Alignment::Center),
            )
            .push(
                text(&listing.location)
                    .size(TEXT_SIZE)
                    .width(150.)
                    .align_y(Alignment::Center),
            )
            .push(
                text(format!("₹{:.0}/month", listing.monthly_price))
                    .size(TEXT_SIZE)
                    .shaping(text::Shaping::Advanced)
                    .width(150.)
                    .align_y(Alignment::Center),
            )
            .push(
                text(format!("{:.1} ★", listing.rating))
                    .size(TEXT_SIZE)
                    .shaping(text::Shaping::Advanced)
                    .width(80.)
                    .align_y(Alignment::Center),
            )
            .align_y(Alignment::Center);

        grid = grid.push(row![Rule::horizontal(1.)].width(LIST_WIDTH));
        grid = grid.push(listing_row);
    }

    if visible.is_empty() {
        grid = grid.push(row![Rule::horizontal(1.)].width(LIST_WIDTH));
        grid = grid.push(text("No listings in this category.").size(TEXT_SIZE));
    }

    grid = grid.push(row![Rule::horizontal(1.)].width(LIST_WIDTH));
    grid = grid.push(
        text(format!(
            "Page {} / {}",
            pagination.current_page,
            total_pages.max(1)
        ))
        .size(TEXT_SIZE),
    );
    grid = grid.push(Space::new(Length::Shrink, spacing));
    grid = grid.push(page_selector(
        pagination.current_page,
        total_pages,
        Message::PageSelected,
    ));

    grid.into()
}

fn filter_button<'a>(
    label: impl text::IntoFragment<'a>,
    category: Option<ListingCategory>,
    selected: Option<ListingCategory>,
) -> iced::Element<'a, Message> {
    button(text(label).size(TEXT_SIZE).center())
        .height(Length::Fixed(GLOBAL_BUTTON_HEIGHT))
        .style(if category == selected {
            button::primary
        } else {
            button::secondary
        })
        .on_press(Message::CategorySelected(category))
        .into()
}
