//! CSV boundary: buffered row input and normalized record output.

use std::io::{Read, Write};

use csv::{ByteRecord, ReaderBuilder, WriterBuilder};

use crate::{Record, CSV_HEADERS};

/// Reads every row of `input`, header included, into memory.
///
/// Fields stay raw bytes; decoding happens per row so one undecodable cell
/// only costs its own row. Rows may have differing field counts.
pub fn read_rows<R: Read>(input: R) -> Result<Vec<ByteRecord>, csv::Error> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
        .into_byte_records()
        .collect()
}

/// Writes the fixed header and one row per record, then flushes.
pub fn write_records<W: Write>(output: W, records: &[Record]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(output);
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn reads_ragged_rows_without_header_handling() {
        let rows = read_rows("a,b,c\n1,2\n\"x,y\",z,w,v\n".as_bytes()).expect("must read");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].get(0), Some(&b"x,y"[..]));
    }

    #[test]
    fn keeps_undecodable_bytes_verbatim() {
        let rows = read_rows(&b"a,b\n\xff,c\n"[..]).expect("must read");
        assert_eq!(rows[1].get(0), Some(&b"\xff"[..]));
    }

    #[test]
    fn reader_failure_is_reported() {
        let err = read_rows(FailingReader).expect_err("must fail");
        assert!(matches!(err.kind(), csv::ErrorKind::Io(_)));
    }

    #[test]
    fn writes_header_for_empty_batch() {
        let mut output = Vec::new();
        write_records(&mut output, &[]).expect("must write");
        assert_eq!(
            String::from_utf8(output).expect("utf8"),
            "exchange,base_currency,quote_currency,transaction_type,timestamp,amount,price,fee\n"
        );
    }
}
