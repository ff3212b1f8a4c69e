//! `qn shell`: an interactive dashboard over the restored session.
//!
//! The router lives only for the duration of the shell; every `view` command
//! replaces the active tag and prints the screen it resolves to.

use std::io::{BufRead, Write};

use anyhow::Context;
use qn_auth::SessionStore;
use qn_core::entities::User;
use qn_nav::ViewRouter;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::require_user;
use crate::commands::view::{ScreenResponse, menu_rows};
use crate::context::AppContext;
use crate::output::render;

const HELP: &str = "\
commands:
  view [TAG]  switch to TAG (or re-show the current view)
  current     print the active view tag
  menu        list the sidebar
  whoami      show the signed-in user
  logout      sign out and leave the shell
  help        show this help
  exit        leave the shell";

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Option<String>),
    Exit(Option<String>),
}

pub struct ShellSession {
    user: User,
    router: ViewRouter,
    format: OutputFormat,
}

impl ShellSession {
    #[must_use]
    pub fn new(user: User, format: OutputFormat) -> Self {
        Self {
            router: ViewRouter::for_role(user.role),
            user,
            format,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}> ", self.router.current_view())
    }

    /// Run one input line.
    pub fn execute(&mut self, line: &str, session: &mut SessionStore) -> anyhow::Result<Step> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));

        let reply = match command {
            "" => None,
            "view" => {
                if !rest.is_empty() {
                    self.router.set_view(rest);
                }
                Some(render(
                    &ScreenResponse::resolve(&self.user, &self.router),
                    self.format,
                )?)
            }
            "current" => Some(self.router.current_view().to_string()),
            "menu" => Some(render(
                &menu_rows(self.user.role, self.router.current_view()),
                self.format,
            )?),
            "whoami" => Some(render(&self.user, self.format)?),
            "logout" => {
                session.logout()?;
                return Ok(Step::Exit(Some("Signed out.".to_string())));
            }
            "help" => Some(HELP.to_string()),
            "exit" | "quit" => return Ok(Step::Exit(None)),
            other => Some(format!("unknown command '{other}' (try 'help')")),
        };

        Ok(Step::Continue(reply))
    }
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_user(ctx)?;
    let mut shell = ShellSession::new(user, flags.format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut shell, &mut ctx.session, &mut stdin.lock(), &mut stdout.lock())
}

/// Read commands from `input` until `exit`, `logout`, or end of input.
pub fn run<R: BufRead, W: Write>(
    shell: &mut ShellSession,
    session: &mut SessionStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{}", shell.prompt())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read command")? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match shell.execute(&line, session) {
            Ok(Step::Continue(Some(reply))) => writeln!(out, "{reply}")?,
            Ok(Step::Continue(None)) => {}
            Ok(Step::Exit(farewell)) => {
                if let Some(farewell) = farewell {
                    writeln!(out, "{farewell}")?;
                }
                return Ok(());
            }
            Err(error) => {
                tracing::warn!(%error, "shell command failed");
                writeln!(out, "error: {error:#}")?;
            }
        }
    }
}
