// PDF417 codeword extraction tool
//
//   pdf417tool decode <image>...
//   pdf417tool stats <image>
//   pdf417tool render <out.png> <codeword>...
use rust_pdf417::tools::synth::SymbolRenderer;
use rust_pdf417::tools::{grid_stats, grid_to_luma, load_grid};
use rust_pdf417::{BitMatrix, decode_batch};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage:");
    eprintln!("  pdf417tool decode <image>...");
    eprintln!("  pdf417tool stats <image>");
    eprintln!("  pdf417tool render <out.png> <codeword>...");
    ExitCode::from(2)
}

fn run_decode(paths: &[PathBuf]) -> ExitCode {
    let mut grids: Vec<BitMatrix> = Vec::with_capacity(paths.len());
    let mut names = Vec::with_capacity(paths.len());
    for path in paths {
        match load_grid(path) {
            Ok(grid) => {
                grids.push(grid);
                names.push(path.display().to_string());
            }
            Err(e) => println!("SKIP: {} -> {}", path.display(), e),
        }
    }

    let mut failures = 0;
    for (name, result) in names.iter().zip(decode_batch(&grids)) {
        match result {
            Ok(result) => {
                println!(
                    "OK: {} -> {} rows, {} codewords, {} erasures, ec level {}",
                    name,
                    result.rows(),
                    result.codewords().len(),
                    result.erasures().len(),
                    result.ec_level_or_sentinel()
                );
                println!("  codewords: {:?}", result.codewords());
                if !result.erasures().is_empty() {
                    println!("  erasures: {:?}", result.erasures());
                }
            }
            Err(e) => {
                failures += 1;
                println!("FAIL: {} -> {}", name, e);
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_stats(path: &PathBuf) -> ExitCode {
    match load_grid(path) {
        Ok(grid) => {
            let stats = grid_stats(&grid);
            println!(
                "{}: dimension={} black={} boundaries={}",
                path.display(),
                stats.dimension,
                stats.black,
                stats.boundaries
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_render(out: &PathBuf, args: &[String]) -> ExitCode {
    let codewords: Option<Vec<u16>> = args.iter().map(|a| a.trim().parse::<u16>().ok()).collect();
    let Some(codewords) = codewords else {
        eprintln!("codewords must be integers in 0..=928");
        return ExitCode::from(2);
    };

    let Some(grid) = SymbolRenderer::new(codewords.len()).codewords(&codewords).render() else {
        eprintln!("cannot render {:?}", codewords);
        return ExitCode::FAILURE;
    };

    match grid_to_luma(&grid).save(out) {
        Ok(()) => {
            println!("wrote {} ({}x{})", out.display(), grid.width(), grid.height());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", out.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.split_first() {
        Some((cmd, rest)) if cmd == "decode" && !rest.is_empty() => {
            let paths: Vec<PathBuf> = rest.iter().map(PathBuf::from).collect();
            run_decode(&paths)
        }
        Some((cmd, rest)) if cmd == "stats" && rest.len() == 1 => {
            run_stats(&PathBuf::from(&rest[0]))
        }
        Some((cmd, rest)) if cmd == "render" && rest.len() >= 2 => {
            run_render(&PathBuf::from(&rest[0]), &rest[1..])
        }
        _ => usage(),
    }
}
