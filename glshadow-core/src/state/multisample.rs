use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::driver::{get_boolean, get_float};
use crate::gl::*;

/// Arguments of `glSampleCoverage`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleCoverage {
    pub value: GLfloat,
    pub invert: bool,
}

impl Default for SampleCoverage {
    fn default() -> Self {
        SampleCoverage {
            value: 1.0,
            invert: false,
        }
    }
}

state_group! {
    /// Multisample rasterization state, `GL_MULTISAMPLE_BIT`.
    pub struct Multisample("multisample", MULTISAMPLE) {
        cap multisample: bool = true => { GL_MULTISAMPLE };
        cap sample_alpha_to_coverage: bool = false => { GL_SAMPLE_ALPHA_TO_COVERAGE };
        cap sample_alpha_to_one: bool = false => { GL_SAMPLE_ALPHA_TO_ONE };
        cap sample_coverage: bool = false => { GL_SAMPLE_COVERAGE };
        param coverage: SampleCoverage = SampleCoverage::default() => {
            get |dt| SampleCoverage {
                value: get_float(dt, GL_SAMPLE_COVERAGE_VALUE),
                invert: get_boolean(dt, GL_SAMPLE_COVERAGE_INVERT),
            },
            set |v| Call::SampleCoverage(v.value, v.invert)
        };
        cap sample_shading: bool = false => { GL_SAMPLE_SHADING };
        param min_sample_shading: GLfloat = 0.0 => {
            get |dt| get_float(dt, GL_MIN_SAMPLE_SHADING_VALUE),
            set |v| Call::MinSampleShading(v)
        };
    }
}

impl Multisample {
    pub fn gl_sample_coverage(&mut self, value: GLfloat, invert: bool) {
        self.coverage = SampleCoverage { value, invert };
    }

    pub fn gl_min_sample_shading(&mut self, value: GLfloat) {
        self.min_sample_shading = value;
    }
}
