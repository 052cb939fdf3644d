use std::path::PathBuf;

use anyhow::Result;

use stamped::presentation::create_check_use_case;

use super::Context;

pub fn cmd_check(ctx: &Context, paths: &[PathBuf]) -> Result<bool> {
    let result = create_check_use_case().execute(paths);

    ctx.renderer.check(&mut ctx.stdout(), &result)?;
    Ok(result.is_success())
}
