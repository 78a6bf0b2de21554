// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! # Terra Bridge SDK
//!
//! Helpers for submitting, confirming and formatting Terra bridge transactions.

pub mod account;
pub mod address;
pub mod balance;
pub mod denom;
pub mod gas;
pub mod network;
pub mod tx;
