//! Camera frame type handed from the capture thread to the UI

/// A single RGBA video frame with tightly packed rows
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// Position in the capture order, starting at 1 for a live stream
    pub sequence: u64,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .field("sequence", &self.sequence)
            .finish()
    }
}

impl Frame {
    /// Copy a frame out of a mapped buffer whose rows may be padded
    ///
    /// Returns None when the buffer is too short for the given geometry.
    pub fn from_strided(width: u32, height: u32, stride: usize, data: &[u8]) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let row_len = width as usize * 4;
        let rows = height as usize;
        if stride < row_len {
            return None;
        }

        let needed = stride * (rows - 1) + row_len;
        if data.len() < needed {
            return None;
        }

        let pixels = if stride == row_len {
            data[..row_len * rows].to_vec()
        } else {
            data.chunks(stride)
                .take(rows)
                .flat_map(|row| &row[..row_len])
                .copied()
                .collect()
        };

        Some(Self {
            width,
            height,
            pixels,
            sequence: 0,
        })
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Convert into an image handle for display
    pub fn into_handle(self) -> cosmic::widget::image::Handle {
        cosmic::widget::image::Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_rows_are_copied_as_is() {
        let data: Vec<u8> = (0..16).collect();
        let frame = Frame::from_strided(2, 2, 8, &data).unwrap();
        assert_eq!(frame.pixels, data);
        assert_eq!(frame.sequence, 0);
        assert_eq!(frame.with_sequence(7).sequence, 7);
    }

    #[test]
    fn test_row_padding_is_stripped() {
        // 1 pixel wide, 2 rows, 4 bytes of padding per row
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8];
        let frame = Frame::from_strided(1, 2, 8, &data).unwrap();
        assert_eq!(frame.pixels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!((frame.width, frame.height), (1, 2));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let data = [0u8; 7];
        assert!(Frame::from_strided(1, 2, 4, &data).is_none());
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let data = [0u8; 64];
        assert!(Frame::from_strided(0, 2, 4, &data).is_none());
        assert!(Frame::from_strided(2, 0, 8, &data).is_none());
        assert!(Frame::from_strided(4, 2, 8, &data).is_none());
    }
}
