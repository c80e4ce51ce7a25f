//! Realtime stereo playback through the cpal backend.

use cm_audio::{AudioError, AudioOutput, CpalOutput};
use cm_engine::Frame;
use cm_ir::AudioBuffer;

/// Play a stereo buffer to the default output device, blocking until
/// the whole buffer has been pushed.
pub fn play(buffer: &AudioBuffer, sample_rate: u32) -> Result<(), AudioError> {
    assert_eq!(buffer.channels(), 2);

    let (mut output, consumer) = CpalOutput::new()?;
    output.build_stream(consumer)?;
    output.start()?;

    let device_rate = output.sample_rate();
    if device_rate != sample_rate {
        // Resampling is out of scope; pitch will be off by the ratio.
        eprintln!(
            "device rate {} != file rate {}; playing unresampled",
            device_rate, sample_rate
        );
    }

    output.write_block_spin(buffer.channel(0), buffer.channel(1));

    // Push ~100ms of silence so the tail is not cut off by stop()
    for _ in 0..device_rate / 10 {
        output.write_spin(Frame::silence());
    }

    output.stop()
}
