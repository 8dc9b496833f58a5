// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod assistant;
pub mod chat;
pub mod debts;
pub mod doctor;
pub mod reminders;
pub mod summary;
pub mod transactions;
