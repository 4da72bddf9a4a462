use crate::di::Pipeline;
use ferrous_pdns_application::services::PipelineStatsSnapshot;
use ferrous_pdns_infrastructure::capture::PcapFileReader;
use tracing::{debug, error, info};

pub struct RunSummary {
    pub frames: u64,
    pub stats: PipelineStatsSnapshot,
}

/// Feeds every frame of the capture through the pipeline. Packet errors
/// skip the frame; any other error stops the run after closing the formats.
pub fn run_capture(input: &str, pipeline: &Pipeline) -> anyhow::Result<RunSummary> {
    let mut reader = PcapFileReader::open(input)?;
    let formats = pipeline.process_packet.formats();

    for format in formats {
        pipeline.registry.initialize(format)?;
    }
    info!(input = %input, "Reading capture");

    let result = process_frames(&mut reader, pipeline);

    for format in formats {
        if let Err(e) = pipeline.registry.close(format) {
            error!(format = %format, error = %e, "Failed to close output format");
        }
    }
    result?;

    Ok(RunSummary {
        frames: reader.frames(),
        stats: pipeline.process_packet.stats().snapshot(),
    })
}

fn process_frames<R: std::io::Read>(
    reader: &mut PcapFileReader<R>,
    pipeline: &Pipeline,
) -> anyhow::Result<()> {
    for packet in reader {
        let packet = packet?;
        match pipeline.process_packet.execute(&packet) {
            Ok(rows) => debug!(rows, "Frame processed"),
            Err(e) if e.is_packet_error() => continue,
            Err(e) => {
                error!(error = %e, "Aborting capture");
                return Err(e.into());
            }
        }
    }
    Ok(())
}
