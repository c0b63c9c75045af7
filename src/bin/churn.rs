use rbtree_bench::{random_keys, Workload};

const SIZE: usize = 10 * 1000;
const COUNT: usize = 1000;

fn main() {
    println!("Running rbtree churn test");
    let workload = Workload::churn(SIZE, COUNT);
    let keys = random_keys(SIZE, rand::random());
    let _ = workload.run(&keys);
}
