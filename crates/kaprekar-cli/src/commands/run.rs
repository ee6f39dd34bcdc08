use crate::cli::RoutineArgs;
use crate::support::{
    column_width, exit_with, format_step, print_json, run_or_exit, settings_or_exit,
};
use kaprekar_kernel::{Classification, classify};
use serde_json::json;

pub fn run(number: i64, args: RoutineArgs, json_output: bool) {
    let settings = settings_or_exit(&args);
    if let Err(e) = settings.check_bounds(number) {
        exit_with(e);
    }

    let routine = run_or_exit(&settings, number);
    let classification = classify(routine.seed, routine.width);

    if json_output {
        let payload = json!({
            "seed": routine.seed,
            "width": routine.width,
            "max_iterations": settings.max_iterations,
            "padding": settings.padding,
            "classification": classification,
            "termination": routine.termination,
            "final_value": routine.final_value(),
            "steps": routine.steps,
        });
        print_json(&payload);
        return;
    }

    println!("kaprekar run {number} --width {}", routine.width);
    match classification {
        Classification::Constant { width } => {
            println!("  {number} is Kaprekar's constant for {width} digits");
        }
        Classification::RepeatingDigits => {
            println!("  Enter a number that has at least two different digits");
        }
        Classification::Ordinary => {
            let column = column_width(&routine.steps);
            for (index, step) in routine.steps.iter().enumerate() {
                println!("{}", format_step(index, step, routine.width, column));
            }
            println!("  Termination: {}", routine.termination);
        }
    }
}
