use rs_randstr_core::model::human_friendly::HumanFriendly;
use rs_randstr_core::model::kind::StringKind;
use rs_randstr_core::source::RandomSource;

fn main() {
    // Seed the process-wide source from the clock (done lazily anyway)
    rs_randstr_core::seed_random_source();

    // Crate-level helpers use the process-wide source
    let bytes = rs_randstr_core::uniform_byte_string(10);
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    println!("Bytes (hex): {}", hex);
    println!("Human friendly (7): {}", rs_randstr_core::human_friendly_string(7));
    println!("Human friendly (20): {}", rs_randstr_core::human_friendly_string(20));
    println!("Cookie friendly: {}", rs_randstr_core::cookie_friendly_string(20));
    println!("English frequency: {}", rs_randstr_core::english_frequency_string(20));
    println!("Human friendly English (7): {}", rs_randstr_core::human_friendly_english_string(7));
    println!("Human friendly English (20): {}", rs_randstr_core::human_friendly_english_string(20));

    // PKCE lengths are clamped into [43, 128]
    for length in [10, 60, 200] {
        let verifier = rs_randstr_core::pkce_code_verifier_string(length);
        println!("PKCE verifier (asked {}, got {}): {}", length, verifier.len(), verifier);
    }

    // A dedicated seeded source gives the same words on every run
    let mut rng = RandomSource::with_seed(1337);
    let generator = HumanFriendly::english();
    for i in 0..5 {
        println!("Seeded word {}: {}", i + 1, generator.generate(&mut rng, 8));
    }

    // Every kind through the generic dispatcher
    for kind in StringKind::ALL.iter().filter(|k| k.is_text()) {
        let value = kind.generate(&mut rng, 12);
        println!("{}: {}", kind, String::from_utf8_lossy(&value));
    }

    // Kinds named on the command line, e.g. `rs-randstr-exemple pkce-code-verifier`
    for arg in std::env::args().skip(1) {
        match arg.parse::<StringKind>() {
            Ok(kind) if kind.is_text() => {
                println!("{}: {}", kind, String::from_utf8_lossy(&kind.generate(&mut rng, 16)));
            }
            Ok(kind) => println!("{}: {} bytes", kind, kind.generate(&mut rng, 16).len()),
            Err(e) => println!("{}", e),
        }
    }
}
