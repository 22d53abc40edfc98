//! MMU Simulator - Main Entry Point
//!
//! Usage: mmu-sim [OPTIONS] <trace_file> <policy>
//!
//! Arguments:
//!   trace_file  - Trace of hexadecimal logical addresses, one per line
//!   policy      - Replacement policy: LRU or SegundaChance
//!
//! Options:
//!   -v, --verbose  Print each translation as it happens
//!   -h, --help     Print help information

use std::env;
use std::error::Error;
use std::process;

use log::{info, warn};

use mmu_sim::io::read_trace_file_lossy;
use mmu_sim::mmu::Mmu;
use mmu_sim::replacement::Policy;
use mmu_sim::translation::LogicalAddress;

/// Command-line configuration
struct Config {
    trace_file: String,
    policy: Policy,
    verbose: bool,
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_help(program: &str) {
    eprintln!("MMU Simulator - Replays an address trace through a TLB and page table");
    eprintln!();
    eprintln!("Usage: {} [OPTIONS] <trace_file> <policy>", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  trace_file  - Trace file with one hex logical address per line");
    eprintln!("  policy      - Replacement policy: LRU or SegundaChance");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose  Print each translation as it happens");
    eprintln!("  -h, --help     Print this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} trace.txt LRU", program);
    eprintln!("  {} -v trace.txt SegundaChance", program);
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    let mut verbose = false;
    let mut positional: Vec<&String> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                process::exit(0);
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            _ if arg.starts_with('-') => {
                return Err(format!(
                    "Unknown option: {}\nUse --help for usage information.",
                    arg
                ));
            }
            _ => {
                positional.push(arg);
            }
        }
    }

    if positional.len() != 2 {
        print_help(program);
        return Err(format!(
            "\nError: Expected 2 arguments, got {}",
            positional.len()
        ));
    }

    let policy: Policy = positional[1].parse().map_err(|e| format!("{}", e))?;

    Ok(Config {
        trace_file: positional[0].clone(),
        policy,
        verbose,
    })
}

/// Main logic separated from main() for cleaner error handling
fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let (addresses, skipped) = read_trace_file_lossy(&config.trace_file)?;
    if skipped > 0 {
        warn!("{} malformed trace records skipped", skipped);
    }

    let mut mmu = Mmu::with_policy(config.policy)?;

    info!(
        "translating {} addresses with policy {}",
        addresses.len(),
        config.policy
    );

    for &addr in &addresses {
        match mmu.translate(addr) {
            Ok(pa) => {
                if config.verbose {
                    let la = LogicalAddress::from_raw(addr);
                    eprintln!("{} -> PA {:#x}", la, pa);
                }
            }
            // Out-of-width addresses cannot occur here (u32 trace,
            // 32-bit default width) but a narrowed rebuild would hit
            // this arm; skip the record like any other bad input.
            Err(e) => warn!("skipping address {:#x}: {}", addr, e),
        }
    }

    let stats = mmu.stats();
    if config.verbose {
        eprintln!();
        eprintln!("=== Summary ===");
        eprintln!("Policy: {}", mmu.policy());
        eprintln!("Addresses translated: {}", stats.accesses());
        eprintln!("Resident pages: {}", mmu.resident_pages());
        eprintln!();
    }

    println!("TLB Hits: {}", stats.tlb_hits());
    println!("TLB Hit Rate: {:.2}%", stats.tlb_hit_rate()? * 100.0);
    println!("TLB Misses: {}", stats.tlb_misses());
    println!("Page Faults: {}", stats.page_faults());
    println!("Page Fault Rate: {:.2}%", stats.page_fault_rate()? * 100.0);

    Ok(())
}
