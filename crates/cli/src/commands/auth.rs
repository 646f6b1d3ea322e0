//! Auth session commands.

use clap::Subcommand;
use fluxtrade_core::UserRole;
use fluxtrade_store::auth::derive_display_name;

use super::Context;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Start a session (no credential verification; this is a demo)
    Login {
        /// Session role
        #[arg(short, long, default_value = "user")]
        role: UserRole,

        /// Email address; the display name is derived from it
        #[arg(short, long)]
        email: Option<String>,

        /// Explicit display name, overriding the derived one
        #[arg(short, long)]
        name: Option<String>,
    },
    /// End the session
    Logout,
    /// Show the current session
    Status,
}

#[allow(clippy::print_stdout)]
pub fn run(ctx: &mut Context, action: AuthAction) {
    match action {
        AuthAction::Login { role, email, name } => {
            let name = name.or_else(|| {
                email
                    .as_deref()
                    .map(derive_display_name)
            });
            ctx.auth.login(role, name.clone(), email);
            println!(
                "Signed in as {} ({role})",
                name.as_deref().unwrap_or("Shopper")
            );
        }
        AuthAction::Logout => {
            ctx.auth.logout();
            println!("Signed out");
        }
        AuthAction::Status => match ctx.auth.session() {
            Some(session) => {
                println!(
                    "Signed in as {} ({})",
                    session.name.as_deref().unwrap_or("Shopper"),
                    session.role
                );
                if let Some(email) = &session.email {
                    println!("Email: {email}");
                }
            }
            None => println!("Not signed in"),
        },
    }
}
