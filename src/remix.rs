//! Whole-buffer remixing in engine-sized blocks.

use cm_engine::{process, MixConfig};
use cm_ir::{AudioBuffer, BLOCK_SIZE};

/// Run `input` through the engine, one block at a time, and return the
/// remixed buffer.
///
/// `input` must have `cfg.n_src()` channels; the result has
/// `cfg.n_dst()` channels and the same frame count.
pub fn remix(cfg: &MixConfig, input: &AudioBuffer) -> AudioBuffer {
    assert_eq!(input.channels(), cfg.n_src());

    let frames = input.frames();
    let mut output = AudioBuffer::new(cfg.n_dst(), frames);

    {
        let src_planes = input.planes();
        let mut dst_planes = output.planes_mut();

        let mut offset = 0;
        while offset < frames {
            let n = BLOCK_SIZE.min(frames - offset);
            let src_block: Vec<&[f32]> = src_planes
                .iter()
                .map(|p| &p[offset..offset + n])
                .collect();
            let mut dst_block: Vec<&mut [f32]> = dst_planes
                .iter_mut()
                .map(|p| &mut p[offset..offset + n])
                .collect();
            process(cfg, &mut dst_block, &src_block, n);
            offset += n;
        }
    }

    output
}
