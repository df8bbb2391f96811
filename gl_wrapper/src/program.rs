use gl::types::{GLenum, GLint, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

const LOG_LEN: usize = 1024;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = compile(gl::VERTEX_SHADER, self.vert)?;
        let frag = match compile(gl::FRAGMENT_SHADER, self.frag) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: GLint = 0;
        let mut buf = [0_u8; LOG_LEN];

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != 1 {
                gl::GetProgramInfoLog(
                    program,
                    LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(log_to_string(&buf)));
            }

            log::debug!("linked program {program}");

            Ok(Program { id: program })
        }
    }
}

fn compile(kind: GLenum, src: &str) -> Result<GLuint, PBError> {
    let src = CString::new(src).map_err(|_| PBError::InteriorNul)?;

    let mut success: GLint = 0;
    let mut buf = [0_u8; LOG_LEN];

    unsafe {
        let shader = gl::CreateShader(kind);

        gl::ShaderSource(shader, 1, &src.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success != 1 {
            gl::GetShaderInfoLog(
                shader,
                LOG_LEN as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation(log_to_string(&buf)));
        }

        Ok(shader)
    }
}

fn log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
    #[error("shader source contains a nul byte")]
    InteriorNul,
    #[error("no active {0} '{1}' in program")]
    MissingLocation(&'static str, String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    pub fn attrib_location(&self, name: &str) -> Result<GLuint, PBError> {
        let c_name =
            CString::new(name).map_err(|_| PBError::MissingLocation("attribute", name.into()))?;

        let location = unsafe { gl::GetAttribLocation(self.id, c_name.as_ptr()) };

        if location < 0 {
            return Err(PBError::MissingLocation("attribute", name.into()));
        }

        Ok(location as GLuint)
    }

    pub fn uniform_location(&self, name: &str) -> Result<GLint, PBError> {
        let c_name =
            CString::new(name).map_err(|_| PBError::MissingLocation("uniform", name.into()))?;

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };

        if location < 0 {
            return Err(PBError::MissingLocation("uniform", name.into()));
        }

        Ok(location)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
