// File: crates/demo/src/main.rs
// Summary: Demo loads two numeric CSV columns, aligns their axes, and prints the figure config.

use anyhow::{Context, Result};
use align_core::{align, Figure, LayoutOptions, SecondaryAxisOptions};
use std::path::Path;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "sample.csv".to_string());
    let col_a = args.next();
    let col_b = args.next();

    println!("Using input file: {path}");

    let (name_a, series_a, name_b, series_b) =
        load_two_columns(Path::new(&path), col_a.as_deref(), col_b.as_deref())
            .with_context(|| format!("failed to load CSV '{path}'"))?;
    println!(
        "Loaded columns '{name_a}' ({} rows) and '{name_b}' ({} rows)",
        series_a.len(),
        series_b.len()
    );

    let result = align(&series_a, &series_b)
        .context("axis alignment failed")?;
    println!(
        "Left axis:  range [{:.4}, {:.4}], dtick {:.4}",
        result.left.range_min, result.left.range_max, result.left.dtick
    );
    println!(
        "Right axis: range [{:.4}, {:.4}], dtick {:.4}",
        result.right.range_min, result.right.range_max, result.right.dtick
    );
    println!(
        "Gridline intervals per axis: {:.4} / {:.4}",
        result.left.intervals(),
        result.right.intervals()
    );

    let opts = LayoutOptions {
        plot_title: format!("{name_a} vs {name_b}"),
        xaxis_title: "Index".into(),
        yaxis_title: name_a.clone(),
        legend_title: "Series".into(),
        ..LayoutOptions::default()
    };
    let figure = opts
        .apply(Figure::default())
        .apply_alignment(&result.left, &result.right, &SecondaryAxisOptions::default());

    println!("{figure:#?}");
    Ok(())
}

/// Load two numeric columns by header name, or the first two numeric columns
/// when no names are given.
fn load_two_columns(
    path: &Path,
    want_a: Option<&str>,
    want_b: Option<&str>,
) -> Result<(String, Vec<f64>, String, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    println!("Headers: {headers:?}");

    let find = |want: Option<&str>, fallback: usize| -> Result<usize> {
        match want {
            Some(name) => headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .with_context(|| format!("column '{name}' not found in {headers:?}")),
            None => {
                if fallback < headers.len() {
                    Ok(fallback)
                } else {
                    anyhow::bail!("CSV has fewer than {} columns", fallback + 1);
                }
            }
        }
    };
    let ia = find(want_a, 0)?;
    let ib = find(want_b, 1)?;

    let mut series_a = Vec::new();
    let mut series_b = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> {
            rec.get(i).and_then(|s| s.trim().parse::<f64>().ok())
        };
        if let (Some(a), Some(b)) = (parse(ia), parse(ib)) {
            series_a.push(a);
            series_b.push(b);
        }
    }

    if series_a.is_empty() {
        anyhow::bail!("no numeric rows parsed - check headers/delimiter.");
    }
    Ok((headers[ia].clone(), series_a, headers[ib].clone(), series_b))
}
