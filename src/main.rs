//! channelmix CLI — remix a WAV file between speaker layouts.
//!
//! Usage:
//!   channelmix input.wav --to 5.1 --wav output.wav
//!   channelmix input.wav --to stereo --volume 0.8

use channelmix::{matrix_for, play, remix};
use cm_engine::{MixConfig, Route};
use cm_ir::ChannelLayout;
use std::{env, fs};

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).unwrap_or_else(|| {
        eprintln!("Usage: channelmix <input.wav> [--to <layout>] [--volume <v>] [--wav <output.wav>]");
        eprintln!("Layouts: mono, stereo, quad, 3.1, 5.1, 7.1");
        std::process::exit(1);
    });

    let to = flag_value(&args, "--to").unwrap_or_else(|| "stereo".into());
    let wav_path = flag_value(&args, "--wav");
    let volume: f32 = flag_value(&args, "--volume")
        .map(|v| {
            v.parse().unwrap_or_else(|_| {
                eprintln!("Invalid volume: {}", v);
                std::process::exit(1);
            })
        })
        .unwrap_or(1.0);
    if volume < 0.0 {
        eprintln!("Volume must be non-negative");
        std::process::exit(1);
    }

    let data = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });
    let (input, sample_rate) = cm_formats::load_wav(&data).unwrap_or_else(|e| {
        eprintln!("Failed to parse WAV: {:?}", e);
        std::process::exit(1);
    });

    let src_layout = ChannelLayout::default_for(input.channels()).unwrap_or_else(|| {
        eprintln!("No layout for a {}-channel file", input.channels());
        std::process::exit(1);
    });
    let dst_layout = ChannelLayout::from_name(&to).unwrap_or_else(|| {
        eprintln!("Unknown layout: {}", to);
        std::process::exit(1);
    });

    let route = Route::select(&src_layout, &dst_layout);
    let matrix = matrix_for(route, &src_layout, &dst_layout, volume);
    let cfg = MixConfig::new(route, matrix).with_volume(volume);

    println!("Input:    {} ch, {} frames @ {} Hz", input.channels(), input.frames(), sample_rate);
    println!("Output:   {} ch ({})", dst_layout.channels(), to);
    println!("Route:    {:?}", route);
    println!("Volume:   {}", volume);

    let output = remix(&cfg, &input);
    println!("Peak:     in {:.3}, out {:.3}", input.peak(), output.peak());

    match wav_path {
        Some(wav) => {
            let bytes = cm_formats::buffer_to_wav(&output, sample_rate);
            fs::write(&wav, &bytes).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", wav, e);
                std::process::exit(1);
            });
            println!("Wrote {} bytes to {}", bytes.len(), wav);
        }
        None => {
            if output.channels() != 2 {
                eprintln!("Playback is stereo only; use --wav for {} channels", output.channels());
                std::process::exit(1);
            }
            println!("Playing...");
            play(&output, sample_rate).unwrap_or_else(|e| {
                eprintln!("Playback failed: {}", e);
                std::process::exit(1);
            });
            println!("Done.");
        }
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
