// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Kinematics for a two-segment planar (SCARA) arm.
//!
//! The solver derives the joint angles for a target point with the law of
//! cosines and remaps them into the actuator frame of the motors. Every
//! function is pure; there is no state and no I/O.
//!
//! Infeasible targets propagate as NaN through the unchecked path. Use
//! [`algorithm::ik::InverseKinematics::solve`] to get an [`Error`] instead.

pub mod algorithm;
pub mod arm;
pub mod geometry;

mod error;

pub use self::arm::{ArmGeometry, Target};
pub use self::error::Error;

pub use nalgebra;

pub type Result<T> = std::result::Result<T, Error>;
