// SPDX-License-Identifier: MPL-2.0
//! Custom widgets the stock iced set does not cover.

pub mod scroll_suspend;

pub use scroll_suspend::{scroll_suspend, ScrollSuspend};
