// SPDX-License-Identifier: GPL-3.0-only

//! Shared sizing constants used across the application views.

pub const GLOBAL_SPACING: f32 = 6.;
pub const GLOBAL_BUTTON_HEIGHT: f32 = 40.;
pub const TEXT_SIZE: f32 = 16.0;
pub const TITLE_TEXT_SIZE: f32 = 25.0;

/// Side length of the square page-selector controls.
pub const PAGE_CONTROL_SIZE: f32 = 40.0;
