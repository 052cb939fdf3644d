use std::path::PathBuf;

use anyhow::Result;

use stamped::application::VerifyOptions;
use stamped::presentation::create_verify_use_case;

use super::Context;

pub fn cmd_verify(ctx: &Context, paths: &[PathBuf], require_signed: bool) -> Result<bool> {
    let options = VerifyOptions { require_signed };
    let result = create_verify_use_case().execute(paths);

    ctx.renderer.verify(&mut ctx.stdout(), &result)?;
    Ok(result.is_success(&options))
}
