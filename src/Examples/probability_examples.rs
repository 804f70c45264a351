

pub fn probability_examples(task: usize) {
    //

    match task {
        0 => {
            // DROP CHANCE: AT LEAST ONE RARE DROP
            use crate::Probability::drop_chance::DropChanceTask;
            let task = DropChanceTask::new(10, 1, 0.2);
            println!("P(at least 1 in 10 at 20%) = {:.5}", task.at_least().unwrap());

            let task = DropChanceTask::new(10_000, 4_900, 0.5);
            println!("P(X >= 4900 in 10000 fair trials) = {:.5}", task.at_least().unwrap());
        }
        1 => {
            // EXACT COUNTS AND RANGES FOR A FAIR COIN
            use crate::Probability::drop_chance::DropChanceTask;
            let task = DropChanceTask::new(10, 3, 0.5);
            println!("P(X = 3) = {:.7}", task.exactly().unwrap());
            println!("P(3 <= X <= 5) = {:.7}", task.between(3, 5).unwrap());
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
