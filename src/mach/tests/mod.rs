use crate::mach::{Event, Runtime};

mod runtime_test;

/// Consecutive `Running` events tolerated; delays hand back control often.
const PATIENCE: usize = 100;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut running = 0;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Quit => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                running += 1;
                if running > PATIENCE {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
        }
        if event != Event::Running {
            running = 0;
        }
    }
    s.trim_end_matches("Ok\n").to_string()
}
