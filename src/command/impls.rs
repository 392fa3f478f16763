// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! The option map lookups used by [`process_command`](super::process_command)

use crate::{FractrError, command::Options};
use std::collections::HashMap;

fn invalid_value(key: &str, value: &str) -> FractrError {
    FractrError::InvalidParameter(format!(
        "Invalid value for parameter {{\"{key}\"}}: {{\"{value}\"}}"
    ))
}

impl Options for HashMap<String, String> {
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, FractrError> {
        match self.get(key) {
            Some(v) => v.trim().parse().map_err(|_| invalid_value(key, v)),
            None => default.ok_or_else(|| {
                FractrError::MissingParameter(format!(
                    "The mandatory parameter \"{key}\" was missing"
                ))
            }),
        }
    }

    fn get_parsed_option<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, FractrError> {
        self.get(key)
            .map(|v| v.trim().parse().map_err(|_| invalid_value(key, v)))
            .transpose()
    }

    fn get_mandatory_option(&self, key: &str) -> Result<&str, FractrError> {
        match self.get(key) {
            Some(v) => Ok(v),
            None => Err(FractrError::MissingParameter(format!(
                "The parameter {{\"{key}\"}} was missing"
            ))),
        }
    }

    fn does_option_exist(&self, key: &str) -> Result<bool, FractrError> {
        Ok(self.contains_key(key))
    }
}
