use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ggxcube", version, about = "Prefilter an RGBA8 DDS cube map into a GGX roughness mip chain")]
struct Cli {
    /// Input DDS cube map (uncompressed RGBA8, one level).
    input: PathBuf,

    /// Output DDS path.
    #[arg(short, long, default_value = "output.dds")]
    output: PathBuf,

    /// Worker threads (default: all cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Force the vector kernel on or off (default: detect at startup).
    #[arg(short = 's', long, value_enum)]
    simd: Option<Toggle>,

    /// Output texels per task.
    #[arg(long, default_value_t = 256)]
    chunk_size: usize,

    /// Also write every face and level as PNG into this directory.
    #[arg(long)]
    preview_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = ggxcube::PrefilterOpts {
        threading: ggxcube::ConvolveThreading {
            threads: cli.threads,
            chunk_size: cli.chunk_size,
        },
        kernel: match cli.simd {
            None => ggxcube::KernelChoice::Auto,
            Some(Toggle::On) => ggxcube::KernelChoice::Simd,
            Some(Toggle::Off) => ggxcube::KernelChoice::Scalar,
        },
    };
    opts.validate().context("invalid options")?;

    let (cube, stats) = ggxcube::prefilter_file(&cli.input, &cli.output, &opts)
        .with_context(|| format!("prefilter {}", cli.input.display()))?;

    if let Some(dir) = &cli.preview_dir {
        let written = ggxcube::write_face_previews(&cube, dir)
            .with_context(|| format!("write previews to {}", dir.display()))?;
        eprintln!("wrote {} previews to {}", written.len(), dir.display());
    }

    eprintln!(
        "wrote {} ({} texels, {} mips, {} kernel, {} threads, {:.2?})",
        cli.output.display(),
        stats.output_texels,
        stats.num_mips,
        stats.kernel,
        stats.threads,
        stats.convolve
    );
    Ok(())
}
