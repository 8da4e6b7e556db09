//! Adaptive arithmetic coding.
//!
//! A message is coded into a single decimal number in `[0, 1)` by narrowing an
//! interval once per symbol. The width given to each symbol comes from a
//! Laplace-smoothed frequency model over the symbols coded so far, so the
//! decoder can rebuild every probability table from its own output.
//!
//! ```
//! use adaptive_arithmetic_coding::{Precision, Session};
//!
//! let message: Vec<char> = "mississippi".chars().collect();
//! let session = Session::from_message(&message, Precision::DEFAULT).unwrap();
//! let value = session.encode(&message).unwrap();
//! assert_eq!(session.decode(&value, message.len()).unwrap(), message);
//! ```

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod interval;
pub mod model;
pub mod precision;
pub mod session;
pub mod stats;
pub mod value;

pub use alphabet::{Alphabet, Symbol};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodingError, ErrorKind};
pub use interval::{Interval, Partition, partition};
pub use model::{FrequencyCounts, ProbabilityTable, compute_table};
pub use precision::Precision;
pub use session::Session;
pub use stats::CompressionReport;
pub use value::EncodedValue;
