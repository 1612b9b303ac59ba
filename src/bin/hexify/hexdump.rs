// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;
use std::path::Path;

use crate::utils::out_writer;
use anyhow::{Context, Result};
use log::{debug, info};

pub fn hexdump(input: &Path) -> Result<()> {
    info!("Reading input file: {input:?}");
    // Nothing reaches stdout unless the whole file was read.
    let binary_input =
        std::fs::read(input).with_context(|| format!("Failed to read file: {input:?}"))?;
    debug!("Read {} bytes", binary_input.len());

    info!("Writing hex dump");
    let mut w = out_writer();
    hexify::dump(&mut w, &binary_input)
        .and_then(|_| w.flush())
        .context("Failed to write to stdout")?;

    Ok(())
}
