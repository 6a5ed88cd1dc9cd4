//! Decode, transform, encode.

use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use castedit_cast_model::v1::CastV1;
use castedit_cast_model::{decode, encode, CastError, Recording, TimeSecs};

use crate::error::{PipelineError, PipelineResult};
use crate::streams::{ensure_distinct, open_input, open_output, InputStream, OutputStream};
use crate::transformation::Transformation;

/// What a pipeline run did to the recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub events_before: usize,
    pub events_after: usize,
    pub duration_before: TimeSecs,
    pub duration_after: TimeSecs,
}

/// Decode a cast from `reader`, apply `transformation`, encode it to `writer`.
///
/// Nothing is written when decoding or the transformation fails.
pub fn run<T, R, W>(transformation: &mut T, reader: R, writer: W) -> PipelineResult<Summary>
where
    T: Transformation + ?Sized,
    R: BufRead,
    W: Write,
{
    let (recording, summary) = apply(transformation, reader)?;
    encode(writer, &recording).map_err(PipelineError::Encode)?;
    Ok(summary)
}

/// Decode and transform, keeping the result in memory.
fn apply<T, R>(transformation: &mut T, reader: R) -> PipelineResult<(Recording, Summary)>
where
    T: Transformation + ?Sized,
    R: BufRead,
{
    let mut recording = decode(reader).map_err(PipelineError::Decode)?;
    tracing::info!(
        events = recording.len(),
        duration = recording.duration(),
        "decoded cast"
    );

    let (events_before, duration_before) = (recording.len(), recording.duration());
    transformation
        .transform(&mut recording)
        .map_err(|source| PipelineError::Transform {
            name: transformation.name().to_string(),
            source,
        })?;

    let summary = Summary {
        events_before,
        events_after: recording.len(),
        duration_before,
        duration_after: recording.duration(),
    };
    tracing::info!(
        transformation = transformation.name(),
        events = summary.events_after,
        duration = summary.duration_after,
        "transformed cast"
    );
    Ok((recording, summary))
}

/// Read an asciicast v1 document from `reader` and write it as v2.
pub fn convert_v1<R: Read, W: Write>(reader: R, writer: W) -> PipelineResult<Summary> {
    let cast = CastV1::from_reader(reader).map_err(PipelineError::Decode)?;
    let frames = cast.stdout.len();
    let declared = cast.duration;
    let recording = cast.into_recording();

    let summary = Summary {
        events_before: frames,
        events_after: recording.len(),
        duration_before: declared.unwrap_or_else(|| recording.duration()),
        duration_after: recording.duration(),
    };
    tracing::info!(frames, duration = summary.duration_after, "converted v1 cast");

    encode(writer, &recording).map_err(PipelineError::Encode)?;
    Ok(summary)
}

/// A transformation bound to its input and output streams.
///
/// ```no_run
/// use std::path::Path;
/// use castedit_transformer::{Cut, Transformer};
///
/// let cut = Cut { from: 12.2, to: 15.3 };
/// let transformer = Transformer::new(cut, Some(Path::new("demo.cast")), None)?;
/// transformer.transform()?;
/// # Ok::<(), castedit_transformer::PipelineError>(())
/// ```
#[derive(Debug)]
pub struct Transformer<T> {
    transformation: T,
    input: InputStream,
    output: Sink,
}

/// Output side of a [`Transformer`].
#[derive(Debug)]
enum Sink {
    /// Created only once the transformation has succeeded; `None` is stdout.
    Deferred(Option<PathBuf>),
    Open(OutputStream),
}

impl Sink {
    fn label(&self) -> String {
        match self {
            Self::Deferred(Some(path)) => path.display().to_string(),
            Self::Deferred(None) => "<stdout>".to_string(),
            Self::Open(stream) => stream.target().display().to_string(),
        }
    }

    fn open(self) -> PipelineResult<OutputStream> {
        match self {
            Self::Deferred(path) => open_output(path.as_deref()).map_err(PipelineError::Open),
            Self::Open(stream) => Ok(stream),
        }
    }
}

impl<T: Transformation> Transformer<T> {
    /// Open `input` (stdin when `None`) and remember `output` (stdout when
    /// `None`).
    ///
    /// The input must be an existing regular file and must not be the same
    /// file as the output. The output file is only created or truncated by
    /// [`transform`](Self::transform), after the edit has succeeded.
    pub fn new(
        transformation: T,
        input: Option<&Path>,
        output: Option<&Path>,
    ) -> PipelineResult<Self> {
        ensure_distinct(input, output).map_err(PipelineError::Open)?;
        let input = open_input(input).map_err(PipelineError::Open)?;
        Ok(Self {
            transformation,
            input,
            output: Sink::Deferred(output.map(Path::to_path_buf)),
        })
    }

    /// Use already opened streams.
    pub fn with_streams(transformation: T, input: InputStream, output: OutputStream) -> Self {
        Self {
            transformation,
            input,
            output: Sink::Open(output),
        }
    }

    /// Run the pipeline, consuming the transformer and closing its streams.
    ///
    /// When decoding or the transformation fails the output is left as it was.
    pub fn transform(mut self) -> PipelineResult<Summary> {
        tracing::info!(
            transformation = self.transformation.name(),
            input = %self.input.source().display(),
            output = %self.output.label(),
            "starting transformation"
        );
        let (recording, summary) = apply(&mut self.transformation, &mut self.input)?;

        let mut output = self.output.open()?;
        encode(&mut output, &recording).map_err(PipelineError::Encode)?;
        output
            .flush()
            .map_err(|e| PipelineError::Encode(CastError::Io(e)))?;
        Ok(summary)
    }
}
