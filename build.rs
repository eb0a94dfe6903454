use clap::CommandFactory;
include!("src/cli.rs");
fn main() -> Result<(), std::io::Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=MAN_PAGE_DIR");
    let Some(out_dir) = std::env::var_os("MAN_PAGE_DIR").map(std::path::PathBuf::from) else {
        return Ok(());
    };

    let mut cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    if let Err(e) = std::fs::write(out_dir.join("subject-pubsub.1"), buffer) {
        println!("cargo:warning=error writing man page: {}", e);
    }

    let bash_completion_file = out_dir.join("subject-pubsub.bash");

    let mut file = std::fs::File::create(bash_completion_file)?;

    let bin_name = "subject-pubsub";
    clap_complete::generate(clap_complete::shells::Bash, &mut cmd, bin_name, &mut file);
    Ok(())
}
