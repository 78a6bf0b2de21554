// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! # Terra Bridge Provider
//!
//! A Terra LCD provider for bridge tooling.

pub mod account;
pub mod error;
pub mod lcd;
pub mod message;
pub mod response;
pub mod tx;
pub mod util;

pub use lcd::{Lcd, LcdClient, TerraConfig};
pub use rust_decimal::Decimal;
