// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jm completions <shell>`
//!
//! ```bash
//! jm completions bash > ~/.local/share/bash-completion/completions/jm
//! jm completions zsh > ~/.zfunc/_jm
//! ```

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::Write;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `C` to `out`, named after the command
pub fn write_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
