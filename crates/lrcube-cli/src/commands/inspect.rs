//! Inspect command - show what a preset contains

use crate::InspectArgs;
use anyhow::Result;
use lrcube::{ParsedPreset, parse_preset};
use lrcube_core::{ChannelShifts, HueChannel};

pub fn run(args: InspectArgs, verbose: bool) -> Result<()> {
    let text = super::read_preset(&args.input)?;
    let preset = super::with_source(&text, args.strict, &args.input, |source| parse_preset(source))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preset)?);
        return Ok(());
    }

    println!("File: {}", args.input.display());
    print_preset(&preset, verbose);
    Ok(())
}

fn print_preset(preset: &ParsedPreset, verbose: bool) {
    println!("  Result: {}", if preset.needs_lut() { "lut" } else { "params" });

    println!("  Parameters:");
    let neutral = lrcube::SimpleAdjustmentParams::neutral();
    for ((name, value), (_, base)) in preset.simple.named_values().zip(neutral.named_values()) {
        if verbose || value != base {
            println!("    {name:<11} {value:>8.3}");
        }
    }
    if preset.simple.is_neutral() && !verbose {
        println!("    (all neutral)");
    }

    let detailed = &preset.detailed;
    println!("  Detailed: {}", detailed.summary());

    if let Some(hsl) = &detailed.hsl {
        for channel in hsl.populated_channels() {
            println!(
                "    {:<8} hue {} sat {} lum {}",
                channel.name(),
                shift_text(&hsl.hue, channel),
                shift_text(&hsl.saturation, channel),
                shift_text(&hsl.luminance, channel),
            );
        }
    }

    if let Some(curve) = &detailed.tone_curve {
        println!("    curve    {} points", curve.len());
        if verbose {
            let points: Vec<String> = curve
                .points()
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            println!("             {}", points.join(" "));
        }
    }

    if let Some(st) = &detailed.split_toning {
        println!(
            "    split    shadows {:.0}/{:.0} highlights {:.0}/{:.0} balance {:.0}",
            st.shadow_hue(),
            st.shadow_saturation(),
            st.highlight_hue(),
            st.highlight_saturation(),
            st.balance(),
        );
    }
}

fn shift_text(shifts: &ChannelShifts, channel: HueChannel) -> String {
    shifts
        .get(channel)
        .map_or_else(|| "-".to_string(), |v| format!("{v:+.0}"))
}
