/// Example program to print the loaded configuration
///
/// Run with: cargo run -p unveil-config --example print_config

fn main() {
    // Load configuration from unveil.toml
    let config = unveil_config::UnveilConfig::load();

    println!("=== Unveil Configuration ===\n");

    println!("Motion Settings:");
    println!("  Enabled: {}", config.motion.enabled);
    println!("  Reduced: {}", config.motion.reduced);
    println!("  Effective: {}", config.motion_enabled());
    println!();

    println!("Default Reveal Parameters:");
    println!("  Duration (ms): {}", config.defaults.duration_ms);
    println!("  Stagger (ms): {}", config.defaults.stagger_ms);
    println!("  Easing: {}", config.defaults.easing);
    println!("  Start Threshold: {}", config.defaults.start);
    println!();

    println!("Demo Settings:");
    println!("  Viewport Height: {}", config.demo.viewport_height);
    println!("  Scroll Step: {}", config.demo.scroll_step);
    println!("  Tick (ms): {}", config.demo.tick_ms);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
