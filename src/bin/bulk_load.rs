use rbtree_bench::{random_keys, Workload};

const SIZE: usize = 10_000_000;

fn main() {
    println!("Running rbtree bulk-load test");
    let workload = Workload::bulk_load(SIZE);
    let keys = random_keys(SIZE, rand::random());
    let _ = workload.run(&keys);
}
