// Writes the startwatch man page and shell completion scripts.
use clap::CommandFactory;
use clap_complete::{generate, Generator, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use std::{
    env, fs,
    io::Error,
    path::{Path, PathBuf},
};

use startwatch::cli::Args;

const BIN_NAME: &str = "startwatch";

fn write_completion<G: Generator>(generator: G, ext: &str, out_dir: &Path) -> Result<PathBuf, Error> {
    let path = out_dir.join(format!("{BIN_NAME}.{ext}"));
    let mut file = fs::File::create(&path)?;
    generate(generator, &mut Args::command(), BIN_NAME, &mut file);
    Ok(path)
}

fn main() -> Result<(), Error> {
    // Output directory from OUT_DIR, defaulting under target/.
    let outdir = env::var_os("OUT_DIR").unwrap_or_else(|| "target/generated".into());
    let out_path = Path::new(&outdir);
    fs::create_dir_all(out_path)?;

    let man_path = out_path.join(format!("{BIN_NAME}.1"));
    let mut man_file = fs::File::create(&man_path)?;
    Man::new(Args::command()).render(&mut man_file)?;
    println!("Generated man page: {man_path:?}");

    let shells = [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ];
    for (shell, ext) in shells {
        let path = write_completion(shell, ext, out_path)?;
        println!("Generated {shell} completions: {path:?}");
    }
    let nu_path = write_completion(Nushell, "nu", out_path)?;
    println!("Generated nushell completions: {nu_path:?}");

    println!(
        "Successfully generated man page and completions in: {}",
        out_path.display()
    );
    Ok(())
}
