use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn shabench_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shabench"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(shabench_command().args(args).output()?)
}

#[test]
fn cli_hash_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let abc = dir.path().join("abc.txt");
    let empty = dir.path().join("empty.txt");
    fs::write(&abc, b"abc")?;
    fs::write(&empty, b"")?;

    let out = run(&["hash", abc.to_str().unwrap(), empty.to_str().unwrap()])?;
    assert!(out.status.success(), "hash failed: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  "));
    assert!(lines[1].starts_with("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855  "));
    Ok(())
}

#[test]
fn cli_hash_stdin() -> Result<(), Box<dyn Error>> {
    let mut child = shabench_command()
        .arg("hash")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child.stdin.take().unwrap().write_all(b"Hola Mundo")?;
    let out = child.wait_with_output()?;

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout)?.trim_end(),
        "c3a4a2e49d91f2177113a9adfcb9ef9af9679dc4557a0a3a4602e1bd39a6f481  -"
    );
    Ok(())
}

#[test]
fn cli_hash_missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let out = run(&["hash", dir.path().join("nope").to_str().unwrap()])?;
    assert!(!out.status.success());
    // Reported once, not once per sink
    assert_eq!(String::from_utf8_lossy(&out.stderr).matches("IO error").count(), 1);
    Ok(())
}

#[test]
fn cli_encrypt_decrypt_compare() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let enc = dir.path().join("plain.sha");
    let dec = dir.path().join("plain.des");
    fs::write(&plain, b"PRUEBA DE ARCHIVO CON CANCION DE BISFP 8038\n")?;

    let out = run(&["encrypt", plain.to_str().unwrap(), enc.to_str().unwrap()])?;
    assert!(out.status.success());
    assert_eq!(fs::read(&enc)?, b"SUXHED GH DUFKLYR FRQ FDQFLRQ GH ELVIS 1961\n");

    let out = run(&["compare", plain.to_str().unwrap(), enc.to_str().unwrap()])?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stdout)?.trim(), "different");

    let out = run(&["decrypt", enc.to_str().unwrap(), dec.to_str().unwrap()])?;
    assert!(out.status.success());

    let out = run(&["compare", plain.to_str().unwrap(), dec.to_str().unwrap()])?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?.trim(), "identical");
    Ok(())
}

#[test]
fn cli_bench_both_modes() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("original.txt");
    let workspace = dir.path().join("ws");
    fs::write(&source, b"Hola Mundo\n".repeat(100))?;

    let out = run(&[
        "bench",
        "--source",
        source.to_str().unwrap(),
        "--copies",
        "3",
        "--workspace",
        workspace.to_str().unwrap(),
    ])?;
    assert!(out.status.success(), "bench failed: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("SEQUENTIAL RUN START"));
    assert!(stdout.contains("PARALLEL RUN END"));
    assert_eq!(stdout.matches("Consistent:         yes").count(), 2);
    let improvement = stdout
        .lines()
        .find(|l| l.starts_with("Improvement:"))
        .expect("improvement line");
    assert!(improvement.ends_with(" %") || improvement.ends_with("n/a"), "{}", improvement);
    assert!(stdout.find("PARALLEL RUN END") < stdout.find("Improvement:"));
    assert!(workspace.join("sequential").join("3.des").exists());
    assert!(workspace.join("parallel").join("1.sha").exists());
    Ok(())
}

#[test]
fn cli_bench_rejects_bad_copy_count() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("original.txt");
    fs::write(&source, b"x")?;

    for copies in ["0", "51"] {
        let out = run(&[
            "bench",
            "--source",
            source.to_str().unwrap(),
            "--copies",
            copies,
            "--workspace",
            dir.path().join("ws").to_str().unwrap(),
        ])?;
        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid copy count"));
    }
    Ok(())
}
