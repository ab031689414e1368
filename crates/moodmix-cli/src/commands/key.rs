use anyhow::Result;

use super::context::AppContext;

pub fn run(ctx: &AppContext, api_key: &str) -> Result<()> {
    ctx.secrets().save_gemini_api_key(api_key)?;
    println!("Gemini API key saved.");
    Ok(())
}
