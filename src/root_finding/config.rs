//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with default tolerance and iteration limit. 
//!
//! [`CommonCfg`] universal fields:  
//! ├ `abs_fx`   : residual tolerance, stop once `|f(x)| < abs_fx`  
//! └ `max_iter` : cap on the number of updates 
//!
//! [`CommonCfg::new`] initializes configuration with default values. 


pub const DEFAULT_ABS_FX   : f64   = 1e-14;
pub const DEFAULT_MAX_ITER : usize = 20;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    abs_fx: f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            abs_fx   : DEFAULT_ABS_FX, 
            max_iter : DEFAULT_MAX_ITER, 
        }
    }

    // getters  
    pub fn abs_fx(&self)   -> f64   { self.abs_fx }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_abs_fx   (&mut self, v: f64)   { self.abs_fx   = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidAbsFx { got: v }
                    );
                }
                self.common.with_abs_fx(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            pub fn abs_fx(&self)   -> f64   { self.common.abs_fx() }
            pub fn max_iter(&self) -> usize { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg; 
