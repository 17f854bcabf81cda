//
//  readthedocs-cli
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Interactive terminal prompts.

use anyhow::Result;
use dialoguer::Confirm;

/// Prompts the user for a yes/no confirmation with a default value.
///
/// The default is shown in the prompt (e.g. `[y/N]`) and accepted when the
/// user presses Enter without input.
///
/// # Errors
///
/// Fails when the terminal interaction cannot be completed, e.g. when stdin
/// is not a TTY.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}
