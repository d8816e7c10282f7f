use dumbbell_rs::{combinator::Combinator, plate_type::PlateType, task::Task};

fn main() -> anyhow::Result<()> {
    println!("=== Debugging fold breadth ===\n");

    // A home gym's worth of plates, loose small plates plus a few big ones
    let plates = PlateType::from_counts(&[
        (0.5, 4),
        (1.25, 8),
        (2.5, 8),
        (5.0, 2),
        (10.0, 2),
        (15.0, 2),
        (20.0, 2),
    ]);

    for (target, dumbbells) in [(7.5, 1), (12.0, 1), (12.0, 2), (22.5, 1)] {
        let combinator = Combinator::new(&plates, Task::new(target, 2.0, dumbbells))?;

        println!("{target}kg on {dumbbells} dumbbell(s):");
        println!(
            "  units: {}",
            combinator
                .units()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut candidates = vec![combinator.seed()];
        for (step, unit) in combinator.units().iter().enumerate() {
            candidates = combinator.fold(candidates, *unit);
            println!("  after step {} ({unit}): {} candidates", step + 1, candidates.len());
        }

        let combinations = combinator.combinations();
        println!("  {} distinct combinations", combinations.len());
        for combination in combinations.iter().take(3) {
            println!("    - {combination}");
        }
        println!();
    }

    Ok(())
}
