use chart_schema::NoteShape;

/// Sound effects the audio collaborator plays in response to gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Normal,
    Double,
    StarNormal,
    StarDouble,
    HoldLoop,
    HoldLoopEnd,
    StarHoldLoop,
    StarHoldLoopEnd,
    /// A tap that found nothing to judge.
    MissTap { star: bool },
}

impl SoundCue {
    pub fn hit(shape: NoteShape) -> Self {
        match shape {
            NoteShape::Star => SoundCue::StarNormal,
            _ => SoundCue::Normal,
        }
    }

    pub fn double(shape: NoteShape) -> Self {
        match shape {
            NoteShape::Star => SoundCue::StarDouble,
            _ => SoundCue::Double,
        }
    }

    pub fn hold_loop(shape: NoteShape) -> Self {
        match shape {
            NoteShape::Star => SoundCue::StarHoldLoop,
            _ => SoundCue::HoldLoop,
        }
    }

    pub fn hold_loop_end(shape: NoteShape) -> Self {
        match shape {
            NoteShape::Star => SoundCue::StarHoldLoopEnd,
            _ => SoundCue::HoldLoopEnd,
        }
    }

    pub fn miss_tap(shape: NoteShape) -> Self {
        SoundCue::MissTap {
            star: shape == NoteShape::Star,
        }
    }
}
