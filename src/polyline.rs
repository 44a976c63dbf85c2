//! Decoder for the compact polyline geometry format used by directions
//! responses, plus path-length measurement over the decoded coordinates.
//!
//! The encoding stores each coordinate as a zigzag-signed delta from the
//! previous point, scaled by 1e5, split into little-endian 5-bit chunks,
//! and offset into printable ASCII by 63. Bit 0x20 of a chunk marks that
//! more chunks follow for the same component.

use geo::Point;

use crate::models::types::{Result, TransitError};
use crate::spatial::queries::haversine_distance;

/// Decode an encoded polyline into coordinates, in input order.
///
/// Empty input is an empty path, not an error. Input that ends while a
/// component is still expecting more chunks (or that ends between the
/// latitude and longitude halves of a pair) fails with
/// [`TransitError::MalformedEncoding`].
pub fn decode(encoded: &str) -> Result<Vec<Point>> {
    let mut cursor = ByteCursor::new(encoded.as_bytes());
    let mut points = Vec::new();

    // Running accumulators hold the current coordinate x 1e5.
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while !cursor.at_end() {
        lat += cursor.read_delta()?;
        lng += cursor.read_delta()?;
        points.push(Point::new(lng as f64 / 1e5, lat as f64 / 1e5));
    }

    Ok(points)
}

/// Sum of haversine distances over consecutive points, in meters.
///
/// Zero for fewer than two points. Accumulation follows index order, since
/// path order is the direction of travel.
pub fn path_distance_meters(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Byte cursor over an encoded polyline.
///
/// Reads one signed component at a time: read-chunk, accumulate,
/// un-zigzag. Running out of bytes mid-component is a reachable error
/// state, not a silent truncation.
struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Read one variable-length component and return its signed delta.
    fn read_delta(&mut self) -> Result<i64> {
        let mut value: i64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(TransitError::MalformedEncoding { offset: self.pos });
            };
            if !(63..=126).contains(&byte) {
                return Err(TransitError::InvalidEncodingByte {
                    byte,
                    offset: self.pos,
                });
            }
            // A component that no longer fits in 64 bits cannot have come
            // from a real encoder.
            if shift >= 64 {
                return Err(TransitError::MalformedEncoding { offset: self.pos });
            }
            self.pos += 1;

            let chunk = byte - 63;
            value |= i64::from(chunk & 0x1f) << shift;
            shift += 5;

            if chunk & 0x20 == 0 {
                break;
            }
        }

        // Un-zigzag: low bit carries the sign.
        Ok(if value & 1 != 0 {
            !(value >> 1)
        } else {
            value >> 1
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // The canonical published example for this encoding.
    const CANONICAL: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn test_decode_canonical_vector() {
        let points = decode(CANONICAL).unwrap();
        let expected = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];

        assert_eq!(points.len(), expected.len());
        for (point, (lat, lng)) in points.iter().zip(expected) {
            assert_abs_diff_eq!(point.y(), lat, epsilon = 1e-5);
            assert_abs_diff_eq!(point.x(), lng, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_decode_single_point() {
        let points = decode("_p~iF~ps|U").unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].y(), 38.5, epsilon = 1e-5);
        assert_abs_diff_eq!(points[0].x(), -120.2, epsilon = 1e-5);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_truncated_component() {
        // '_' has the continuation bit set, so the input ends mid-component.
        let err = decode("_").unwrap_err();
        assert!(matches!(err, TransitError::MalformedEncoding { offset: 1 }));

        let err = decode("_p~iF~ps|U_").unwrap_err();
        assert!(matches!(err, TransitError::MalformedEncoding { .. }));
    }

    #[test]
    fn test_decode_missing_longitude() {
        // A complete latitude component with no longitude after it.
        let err = decode("_p~iF").unwrap_err();
        assert!(matches!(err, TransitError::MalformedEncoding { offset: 5 }));
    }

    #[test]
    fn test_decode_byte_outside_alphabet() {
        let err = decode(" ").unwrap_err();
        assert!(matches!(
            err,
            TransitError::InvalidEncodingByte { byte: 0x20, offset: 0 }
        ));
    }

    #[test]
    fn test_path_distance_degenerate() {
        assert_eq!(path_distance_meters(&[]), 0.0);
        assert_eq!(path_distance_meters(&[Point::new(-75.0, 45.0)]), 0.0);
    }

    #[test]
    fn test_path_distance_follows_point_order() {
        let out = [
            Point::new(-75.0, 45.0),
            Point::new(-75.0, 46.0),
            Point::new(-75.0, 45.0),
        ];
        // An out-and-back path is twice the one-way leg, not zero.
        let leg = haversine_distance(out[0], out[1]);
        assert_abs_diff_eq!(path_distance_meters(&out), 2.0 * leg, epsilon = 1e-6);
    }

    #[test]
    fn test_canonical_vector_total_distance() {
        let route = crate::models::types::DecodedRoute::new(decode(CANONICAL).unwrap());
        // Two long legs across the western US; ballpark sanity only.
        assert!(route.total_distance_meters > 500_000.0);
        assert!(route.total_distance_meters < 1_500_000.0);
    }
}
