// SPDX-License-Identifier: GPL-3.0-only

pub mod page_selector;

pub use page_selector::page_selector;
