//! Defines and upload-flags command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use houseflow_codegen::config::{merge_cli_with_settings, CliOverrides};
use houseflow_codegen::defines::{inject, load_overlay, BuildEnvironment, InjectOptions};
use houseflow_codegen::domain::Settings;
use std::path::PathBuf;

#[derive(Args)]
pub struct EnvArgs {
    /// Build environment name; selects the `.env.<ENV>` overlay
    #[arg(short, long, env = "PIOENV", value_name = "ENV")]
    pub env: String,

    /// Directory containing the dotenv files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub env_dir: Option<PathBuf>,

    /// Base dotenv file name
    #[arg(long, value_name = "NAME")]
    pub env_file: Option<String>,

    /// Forward this merged key to the upload tool as `--auth=<value>`
    #[arg(long, value_name = "KEY")]
    pub upload_auth_key: Option<String>,
}

impl EnvArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            env_dir: self.env_dir.clone(),
            env_file: self.env_file.clone(),
            upload_auth_key: self.upload_auth_key.clone(),
            ..CliOverrides::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `-DKEY=VALUE` compiler flag per line
    Flags,
    /// The whole build environment as JSON
    Json,
}

#[derive(Args)]
pub struct DefinesArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Flags)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct UploadFlagsArgs {
    #[command(flatten)]
    pub env: EnvArgs,
}

pub fn run_defines(args: DefinesArgs, settings: Settings) -> Result<()> {
    let build_env = build_environment(&args.env, settings)?;

    match args.format {
        OutputFormat::Flags => {
            for flag in build_env.build_flags() {
                println!("{}", flag);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&build_env)
                .context("Failed serializing build environment")?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn run_upload_flags(args: UploadFlagsArgs, settings: Settings) -> Result<()> {
    let build_env = build_environment(&args.env, settings)?;
    if build_env.upload_flags.is_empty() {
        tracing::info!("No upload flags configured");
    }
    for flag in &build_env.upload_flags {
        println!("{}", flag);
    }
    Ok(())
}

fn build_environment(args: &EnvArgs, settings: Settings) -> Result<BuildEnvironment> {
    let settings = merge_cli_with_settings(settings, args.overrides());

    let overlay = load_overlay(&settings.env_dir, &settings.env_file, &args.env)
        .with_context(|| format!("Failed loading dotenv files for environment '{}'", args.env))?;

    let mut build_env = BuildEnvironment::new();
    let options = InjectOptions { upload_auth_key: settings.upload_auth_key };
    inject(&overlay, &mut build_env, &options);
    Ok(build_env)
}
