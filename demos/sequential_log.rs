use std::time::Instant;

use tracing_subscriber::EnvFilter;
use wait_each::prelude::*;
use wait_each::runtime::block_on;

#[derive(Debug)]
struct Rejected(&'static str);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    block_on(run());
}

async fn run() {
    let started = Instant::now();
    let jobs = vec!["fetch", "parse", "store"];
    jobs.wait_each(|job, index, all| async move {
        futures_lite::future::yield_now().await;
        println!("[{:?}] {}/{} {job}", started.elapsed(), index + 1, all.len());
    })
    .await;

    let res = jobs
        .wait_each(|job, _, _| async move {
            match *job {
                "parse" => Err(Rejected(*job)),
                _ => Ok(()),
            }
        })
        .await;
    println!("second pass: {res:?}");
}
