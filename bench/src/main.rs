use follow_graph_core::{Graph, NodeId, UserRecord};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let user_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: follow-graph-bench [mode] [user_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  scalefree   Preferential attachment (celebrity hubs, few follow-backs)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random follows");
        println!("  mutual      Dense friend circles where most follows are returned");
        println!();
        println!("Default user_count: 1000000");
        return;
    }

    println!("follow-graph-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Vec<UserRecord>)> = match mode {
        "scalefree" => vec![("Scale-free (preferential attachment)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "mutual" => vec![("Friend circles (mostly mutual)", gen_friend_circles)],
        "all" => vec![
            (
                "Scale-free (preferential attachment)",
                gen_scale_free as fn(u64) -> Vec<UserRecord>,
            ),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Friend circles (mostly mutual)", gen_friend_circles),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, user_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Vec<UserRecord>, user_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} users", user_count);

    let t = Instant::now();
    let users = generator(user_count);
    let gen_time = t.elapsed();

    let t = Instant::now();
    let graph = Graph::build(users);
    let build_time = t.elapsed();
    println!(
        "Generated in {:.2}s, built in {:.2}s, {} users, {} follows",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
    );

    let t = Instant::now();
    let pairs = follow_graph_core::find_mutual_pairs(&graph);
    println!(
        "Mutual pairs: {} in {:.1}ms",
        pairs.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    // Level sets from user 0 (typically a hub or the ring origin)
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "level", "found", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    let t = Instant::now();
    let levels = follow_graph_core::bfs_levels(&graph, 0);
    let bfs_time = t.elapsed();
    println!(
        "{:>8} {:>12} {:>12} {:>8.1}ms",
        "bfs",
        "-",
        levels.nodes_visited(),
        bfs_time.as_secs_f64() * 1000.0
    );

    for level in [1, 2, 3, 5, 10] {
        let t = Instant::now();
        let found = follow_graph_core::find_at_level(&graph, 0, level);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            level,
            found.len(),
            levels.nodes_visited(),
            elapsed.as_secs_f64() * 1000.0
        );
        if level > levels.depth() {
            println!("{:>8} (deepest level is {})", "", levels.depth());
            break;
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + follows), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn into_users(follows: Vec<Vec<NodeId>>) -> Vec<UserRecord> {
    follows
        .into_iter()
        .enumerate()
        .map(|(id, follows)| UserRecord::new(id as NodeId, follows))
        .collect()
}

/// Scale-free via follow-list sampling (O(follows), not O(n²)).
///
/// Each new user follows endpoints of random existing follows, so popular
/// users attract more followers. Hubs follow back with low probability.
fn gen_scale_free(user_count: u64) -> Vec<UserRecord> {
    let follows_per_user = 10u64;
    let mut follows: Vec<Vec<NodeId>> = vec![Vec::new(); user_count as usize];
    let mut rng = FastRng::new(12345);

    // Endpoint list for O(1) preferential attachment sampling
    let mut endpoints: Vec<u64> = Vec::with_capacity((user_count * follows_per_user * 2) as usize);

    // Seed: small clique that all follow each other
    let seed = 5u64.min(user_count);
    for i in 0..seed {
        for j in 0..seed {
            if i != j {
                follows[i as usize].push(j as NodeId);
                endpoints.push(j);
            }
        }
    }

    for new_user in seed..user_count {
        let attach = follows_per_user.min(new_user);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_user {
                follows[new_user as usize].push(target as NodeId);
                endpoints.push(target);
                endpoints.push(new_user);
                if rng.next(20) == 0 {
                    follows[target as usize].push(new_user as NodeId);
                }
            }
        }
    }

    into_users(follows)
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each user follows its K forward neighbours on a ring, with each follow
/// rewired to a random user with probability p.
fn gen_small_world(user_count: u64) -> Vec<UserRecord> {
    let k = 10u64;
    let p = 0.05f64;
    let mut rng = FastRng::new(67890);

    let follows: Vec<Vec<NodeId>> = (0..user_count)
        .map(|i| {
            (1..=k)
                .map(|j| {
                    let neighbor = (i + j) % user_count;
                    if rng.next_f64() < p {
                        let rewired = rng.next(user_count);
                        if rewired != i {
                            return rewired as NodeId;
                        }
                    }
                    neighbor as NodeId
                })
                .collect::<Vec<NodeId>>()
        })
        .collect();

    into_users(follows)
}

/// Erdos-Renyi: uniform random follows, ~10 per user on average.
fn gen_random(user_count: u64) -> Vec<UserRecord> {
    let mut follows: Vec<Vec<NodeId>> = vec![Vec::new(); user_count as usize];
    let mut rng = FastRng::new(54321);

    for _ in 0..user_count * 10 {
        let from = rng.next(user_count);
        let to = rng.next(user_count);
        if from != to {
            follows[from as usize].push(to as NodeId);
        }
    }

    into_users(follows)
}

/// Friend circles: users grouped into circles of 50 where 80% of follows are
/// returned, plus a few cross-circle follows so BFS leaves the circle.
fn gen_friend_circles(user_count: u64) -> Vec<UserRecord> {
    let circle = 50u64;
    let mut follows: Vec<Vec<NodeId>> = vec![Vec::new(); user_count as usize];
    let mut rng = FastRng::new(77777);

    for i in 0..user_count {
        let base = i - i % circle;
        let size = circle.min(user_count - base);
        for _ in 0..8 {
            let friend = base + rng.next(size);
            if friend == i {
                continue;
            }
            follows[i as usize].push(friend as NodeId);
            if rng.next(10) < 8 {
                follows[friend as usize].push(i as NodeId);
            }
        }
        if rng.next(4) == 0 {
            let stranger = rng.next(user_count);
            if stranger != i {
                follows[i as usize].push(stranger as NodeId);
            }
        }
    }

    into_users(follows)
}
