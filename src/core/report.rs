use crate::domain::model::PassTime;

pub fn format_pass_time(pass: &PassTime) -> String {
    let when = match pass.rise_time() {
        Some(rise) => rise.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

/// One line per pass, in the order the service returned them.
pub fn format_pass_times(passes: &[PassTime]) -> Vec<String> {
    passes.iter().map(format_pass_time).collect()
}
