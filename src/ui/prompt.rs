//! Interactive credential prompts

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::Result;

/// Ask for the AAP username on the terminal
pub fn prompt_username() -> Result<String> {
    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("AAP Username")
        .interact_text()?;
    Ok(username)
}

/// Ask for the AAP password without echoing it
pub fn prompt_password() -> Result<String> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("AAP Password")
        .allow_empty_password(false)
        .interact()?;
    Ok(password)
}
