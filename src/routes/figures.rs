use serde_json::{json, Value};

// Plotly figure JSON assembled server-side; the templates only call
// Plotly.newPlot with whatever arrives here.

pub fn pie(labels: Vec<String>, values: Vec<usize>, title: &str) -> Value {
    figure(
        vec![json!({ "type": "pie", "labels": labels, "values": values })],
        layout(title, None, None),
    )
}

pub fn bar(x: Vec<String>, y: Vec<f64>, title: &str, x_title: &str, y_title: &str) -> Value {
    figure(
        vec![json!({ "type": "bar", "x": x, "y": y })],
        layout(title, Some(x_title), Some(y_title)),
    )
}

pub fn histogram(values: Vec<f64>, nbins: u32, title: &str, x_title: &str) -> Value {
    figure(
        vec![json!({ "type": "histogram", "x": values, "nbinsx": nbins })],
        layout(title, Some(x_title), Some("Count")),
    )
}

/// One box trace per named group.
pub fn grouped_box(
    groups: Vec<(String, Vec<f64>)>,
    title: &str,
    x_title: &str,
    y_title: &str,
) -> Value {
    let traces = groups
        .into_iter()
        .map(|(name, values)| json!({ "type": "box", "name": name, "y": values }))
        .collect();
    figure(traces, layout(title, Some(x_title), Some(y_title)))
}

/// One marker trace per named group.
pub fn grouped_scatter(
    groups: Vec<(String, Vec<f64>, Vec<f64>)>,
    title: &str,
    x_title: &str,
    y_title: &str,
) -> Value {
    let traces = groups
        .into_iter()
        .map(|(name, xs, ys)| {
            json!({ "type": "scatter", "mode": "markers", "name": name, "x": xs, "y": ys })
        })
        .collect();
    figure(traces, layout(title, Some(x_title), Some(y_title)))
}

pub fn heatmap(labels: Vec<&str>, z: [[f64; 3]; 3], title: &str) -> Value {
    figure(
        vec![json!({
            "type": "heatmap",
            "x": labels,
            "y": labels,
            "z": z,
            "colorscale": "RdBu",
            "zmin": -1,
            "zmax": 1,
            "texttemplate": "%{z:.2f}",
        })],
        layout(title, None, None),
    )
}

fn figure(traces: Vec<Value>, layout: Value) -> Value {
    json!({ "data": traces, "layout": layout })
}

fn layout(title: &str, x_title: Option<&str>, y_title: Option<&str>) -> Value {
    let mut layout = json!({
        "title": { "text": title },
        "margin": { "t": 48, "r": 16, "b": 48, "l": 56 },
    });
    if let Some(x_title) = x_title {
        layout["xaxis"] = json!({ "title": { "text": x_title } });
    }
    if let Some(y_title) = y_title {
        layout["yaxis"] = json!({ "title": { "text": y_title } });
    }
    layout
}
