//! Shot-change marker extraction from melt XML reports

use crate::domain::errors::DomainError;
use crate::domain::model::FrameMarker;

/// Name of the property carrying the motion_est shot-change list
pub const SHOT_CHANGE_PROPERTY: &str = "shot_change_list";

fn parse_document(report: &str) -> Result<roxmltree::Document<'_>, DomainError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(report, options)
        .map_err(|e| DomainError::MalformedReport(format!("XML parse error: {}", e)))
}

/// Parse the shot-change markers of a melt analysis report.
///
/// The `shot_change_list` property can appear under the playlist or under a
/// producer, so every `<property>` element in the document is considered and
/// the first one with the marker name wins. Its text is a `;`-separated list
/// of `frame=weight` pairs:
///
/// ```xml
/// <producer id="producer0" in="0" out="120">
///   <property name="shot_change_list">10=1;40=1;95=1</property>
/// </producer>
/// ```
///
/// Returns `Ok(None)` when the property is missing or holds no pairs.
/// Markers keep report order and duplicates are preserved.
pub fn parse_markers(report: &str) -> Result<Option<Vec<FrameMarker>>, DomainError> {
    let doc = parse_document(report)?;

    let payload = doc.descendants().find(|node| {
        node.has_tag_name("property") && node.attribute("name") == Some(SHOT_CHANGE_PROPERTY)
    });
    let payload = match payload {
        Some(node) => node.text().unwrap_or_default(),
        None => return Ok(None),
    };

    let markers = parse_marker_payload(payload)?;
    if markers.is_empty() {
        return Ok(None);
    }
    Ok(Some(markers))
}

/// Parse the text of a `shot_change_list` property
pub fn parse_marker_payload(payload: &str) -> Result<Vec<FrameMarker>, DomainError> {
    payload
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let frame = pair.split('=').next().unwrap_or_default().trim();
            parse_frame(frame)
        })
        .collect()
}

fn parse_frame(text: &str) -> Result<FrameMarker, DomainError> {
    let frame: u64 = text
        .parse()
        .map_err(|_| DomainError::MalformedReport(format!("invalid frame index '{}'", text)))?;
    FrameMarker::try_from(frame)
        .map_err(|_| DomainError::MalformedReport(format!("frame index {} out of range", frame)))
}

/// Read the `out` attribute of the single `<producer>` in a report.
///
/// melt's `out` is the index of the last frame.
pub fn parse_producer_out(report: &str) -> Result<FrameMarker, DomainError> {
    let doc = parse_document(report)?;

    let mut producers = doc.descendants().filter(|node| node.has_tag_name("producer"));
    let producer = match (producers.next(), producers.next()) {
        (Some(producer), None) => producer,
        (None, _) => {
            return Err(DomainError::MalformedReport(
                "report contains no producer element".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(DomainError::MalformedReport(
                "report contains more than one producer element".to_string(),
            ))
        }
    };

    let out = producer.attribute("out").ok_or_else(|| {
        DomainError::MalformedReport("producer element has no 'out' attribute".to_string())
    })?;
    parse_frame(out.trim())
}
