// SPDX-License-Identifier: GPL-3.0-only

use app::Listado;
use iced::window::Settings;

mod app;
mod listado;

fn main() -> Result<(), iced::Error> {
    iced::application("Listado", Listado::update, Listado::view)
        .theme(Listado::theme)
        .default_font(listado::theme::FONT_SANS)
        .window(Settings {
            position: iced::window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .run_with(Listado::new)
}
