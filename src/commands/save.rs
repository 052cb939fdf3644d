use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;

use stamped::application::{SaveOptions, SaveRequest};
use stamped::domain::entities::RekeyMap;
use stamped::presentation::create_save_use_case;
use stamped::{StampedError, StampedResult};

use super::Context;

pub struct SaveArgs {
    pub template: PathBuf,
    pub out: PathBuf,
    pub legacy: Vec<PathBuf>,
    pub rekey: Vec<String>,
    pub rekey_file: Option<PathBuf>,
    pub generated_from: Option<String>,
    pub clobber: bool,
    pub create_only: bool,
    pub dry_run: bool,
    pub diff: bool,
}

fn read_template(path: &Path) -> StampedResult<String> {
    let fs_error = |e: std::io::Error| StampedError::Fs {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(fs_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(fs_error)
    }
}

/// Rekey file entries first, then `--rekey` flags on top
fn load_rekey(entries: &[String], file: Option<&Path>) -> StampedResult<RekeyMap> {
    let mut rekey = match file {
        Some(file) => {
            let content = std::fs::read_to_string(file).map_err(|e| StampedError::Fs {
                path: file.to_path_buf(),
                message: e.to_string(),
            })?;
            RekeyMap::from_toml_str(&content, file)?
        }
        None => RekeyMap::new(),
    };
    rekey.extend(RekeyMap::from_entries(entries)?);
    Ok(rekey)
}

pub fn cmd_save(ctx: &Context, args: SaveArgs) -> Result<bool> {
    let template = read_template(&args.template)?;
    let rekey = load_rekey(&args.rekey, args.rekey_file.as_deref())?;
    tracing::debug!(aliases = rekey.len(), "loaded rekey map");

    let request = SaveRequest {
        template,
        target: args.out,
        legacy: args.legacy,
        rekey,
        generated_from: args.generated_from,
    };

    let save = &ctx.config.save;
    let options = SaveOptions::from_config(save)
        .with_clobber(save.clobber || args.clobber)
        .with_create_only(save.create_only || args.create_only)
        .with_dry_run(args.dry_run);

    let use_case = create_save_use_case(ctx.config.clone());
    let result = use_case.execute(&request, &options)?;

    ctx.renderer.save(&mut ctx.stdout(), &result, args.diff)?;
    Ok(true)
}
