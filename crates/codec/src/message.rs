use crate::bits::{BitReader, BitWriter};
use crate::errors::{CodecError, Result};
use crate::fqdn::NameDecoder;
use crate::header::Header;
use crate::question::Question;
use crate::resource::ResourceRecord;
use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};
use tracing::debug;
use zutil_dns_domain::CodecConfig;

/// Upper bound on entries preallocated from untrusted header counts.
const MAX_PREALLOCATED: usize = 64;

/// A complete DNS message: header, questions and the three record sections.
///
/// The add-methods keep the header counts equal to the section lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answer_records: Vec<ResourceRecord>,
    name_server_records: Vec<ResourceRecord>,
    additional_records: Vec<ResourceRecord>,
}

/// Appends `item` and returns the new section length as a header count.
fn push_counted<T>(section: &'static str, items: &mut Vec<T>, item: T) -> Result<u16> {
    let len = u16::try_from(items.len() + 1).map_err(|_| CodecError::SectionFull(section))?;
    items.push(item);
    Ok(len)
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_query(id: u16) -> Self {
        let mut message = Self::new();
        message.header.id = id;
        message.header.set_default_query_data();
        message
    }

    pub fn new_response(id: u16) -> Self {
        let mut message = Self::new();
        message.header.id = id;
        message.header.set_default_response_data();
        message
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Direct header access. Counts changed here are checked on write.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_records(&self) -> &[ResourceRecord] {
        &self.answer_records
    }

    pub fn name_server_records(&self) -> &[ResourceRecord] {
        &self.name_server_records
    }

    pub fn additional_records(&self) -> &[ResourceRecord] {
        &self.additional_records
    }

    /// Fails with `SectionFull` once a section holds 65535 entries, the
    /// largest count the header can carry.
    pub fn add_question(&mut self, question: Question) -> Result<()> {
        self.header.question_count = push_counted("question", &mut self.questions, question)?;
        Ok(())
    }

    pub fn add_answer_record(&mut self, record: ResourceRecord) -> Result<()> {
        self.header.answer_count = push_counted("answer", &mut self.answer_records, record)?;
        Ok(())
    }

    /// Records before the first one that does not fit stay added.
    pub fn add_answer_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ResourceRecord>,
    {
        for record in records {
            self.add_answer_record(record)?;
        }
        Ok(())
    }

    pub fn add_name_server_record(&mut self, record: ResourceRecord) -> Result<()> {
        self.header.name_server_count =
            push_counted("name server", &mut self.name_server_records, record)?;
        Ok(())
    }

    pub fn add_additional_record(&mut self, record: ResourceRecord) -> Result<()> {
        self.header.additional_count =
            push_counted("additional", &mut self.additional_records, record)?;
        Ok(())
    }

    pub fn read<R: Read>(reader: R) -> Result<Self> {
        Self::read_with(reader, &CodecConfig::default())
    }

    /// Decodes one message, trusting the section counts in its header.
    pub fn read_with<R: Read>(reader: R, config: &CodecConfig) -> Result<Self> {
        let mut reader = BitReader::new(reader);
        let mut names = NameDecoder::new(config.pointer_mode);

        let header = Header::read(&mut reader)?;

        let capacity = usize::from(header.question_count).min(MAX_PREALLOCATED);
        let mut questions = Vec::with_capacity(capacity);
        for _ in 0..header.question_count {
            questions.push(Question::read(&mut reader, &mut names)?);
        }
        let answer_records = read_records(&mut reader, &mut names, header.answer_count)?;
        let name_server_records = read_records(&mut reader, &mut names, header.name_server_count)?;
        let additional_records = read_records(&mut reader, &mut names, header.additional_count)?;

        debug!(
            id = header.id,
            questions = questions.len(),
            answers = answer_records.len(),
            authority = name_server_records.len(),
            additional = additional_records.len(),
            bytes = reader.position(),
            pointer_mode = %config.pointer_mode,
            "DNS message decoded"
        );

        Ok(Self {
            header,
            questions,
            answer_records,
            name_server_records,
            additional_records,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read(bytes)
    }

    pub fn from_bytes_with(bytes: &[u8], config: &CodecConfig) -> Result<Self> {
        Self::read_with(bytes, config)
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        self.write_with(writer, &CodecConfig::default())
    }

    /// Encodes the message. Nothing reaches `writer` unless the whole
    /// message encodes.
    pub fn write_with<W: Write>(&self, mut writer: W, config: &CodecConfig) -> Result<()> {
        let bytes = self.to_bytes_with(config)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(&CodecConfig::default())
    }

    pub fn to_bytes_with(&self, config: &CodecConfig) -> Result<Vec<u8>> {
        self.check_counts()?;

        let mut writer = BitWriter::with_policy(Vec::with_capacity(512), config.overflow_policy);
        self.header.write(&mut writer)?;
        for question in &self.questions {
            question.write(&mut writer)?;
        }
        for record in self
            .answer_records
            .iter()
            .chain(&self.name_server_records)
            .chain(&self.additional_records)
        {
            record.write(&mut writer)?;
        }
        let bytes = writer.into_inner()?;

        debug!(
            id = self.header.id,
            questions = self.questions.len(),
            answers = self.answer_records.len(),
            authority = self.name_server_records.len(),
            additional = self.additional_records.len(),
            bytes = bytes.len(),
            "DNS message encoded"
        );
        Ok(bytes)
    }

    /// Header counts are written as they are, so they must already match.
    fn check_counts(&self) -> Result<()> {
        let sections = [
            ("question", self.header.question_count, self.questions.len()),
            ("answer", self.header.answer_count, self.answer_records.len()),
            ("name server", self.header.name_server_count, self.name_server_records.len()),
            ("additional", self.header.additional_count, self.additional_records.len()),
        ];
        for (section, header, actual) in sections {
            if usize::from(header) != actual {
                return Err(CodecError::CountMismatch {
                    section,
                    header,
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn read_records<R: Read>(
    reader: &mut BitReader<R>,
    names: &mut NameDecoder,
    count: u16,
) -> Result<Vec<ResourceRecord>> {
    let mut records = Vec::with_capacity(usize::from(count).min(MAX_PREALLOCATED));
    for _ in 0..count {
        records.push(ResourceRecord::read(reader, names)?);
    }
    Ok(records)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; {}", self.header)?;

        writeln!(f, "\n;; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(f, ";{}", question)?;
        }

        let sections = [
            ("ANSWER", &self.answer_records),
            ("AUTHORITY", &self.name_server_records),
            ("ADDITIONAL", &self.additional_records),
        ];
        for (title, records) in sections {
            if records.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {} SECTION:", title)?;
            for record in records {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}
