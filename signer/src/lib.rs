// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

//! # Terra Bridge Signer
//!
//! A wallet interface for posting Terra transactions.

mod signer;
mod void;

pub use signer::Signer;
pub use void::Void;
